use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub nx: u32,
    pub ny: u32,
}

impl Resolution {
    pub fn new(nx: u32, ny: u32) -> Self {
        Self { nx, ny }
    }

    pub fn is_empty(&self) -> bool {
        self.nx == 0 || self.ny == 0
    }
}
