use std::fmt;

/// Construction-time flags of a graph. They never change afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Props {
    pub directed: bool,
    pub weighted: bool,
}

impl Props {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self { directed, weighted }
    }

    pub fn directed() -> Self {
        Self::new(true, false)
    }

    pub fn undirected() -> Self {
        Self::new(false, false)
    }

    #[must_use]
    pub fn weighted(self) -> Self {
        Self {
            weighted: true,
            ..self
        }
    }
}

impl fmt::Display for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "directed={} | weighted={}", self.directed, self.weighted)
    }
}
