/// Tracks the finger that started the current gesture. Fingers that land
/// while it is down are ignored until it lifts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrimaryTouch {
    id: Option<u64>,
}

impl PrimaryTouch {
    /// Claim `id` as the primary finger. False when another finger holds it.
    pub fn begin(&mut self, id: u64) -> bool {
        if self.id.is_some() {
            return false;
        }
        self.id = Some(id);
        true
    }

    pub fn is_primary(&self, id: u64) -> bool {
        self.id == Some(id)
    }

    /// Release the primary finger. False for any other finger.
    pub fn end(&mut self, id: u64) -> bool {
        if !self.is_primary(id) {
            return false;
        }
        self.id = None;
        true
    }

    pub fn active(&self) -> Option<u64> {
        self.id
    }
}
