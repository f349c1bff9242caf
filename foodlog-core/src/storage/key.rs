//! Record keys understood by the store.

/// Named records the store persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Every food entry, daily and pantry alike.
    FoodEntries,
    /// Intake and goal written together.
    WaterState,
    /// Older layout kept the intake on its own.
    WaterIntake,
    /// Older layout kept the goal on its own.
    WaterGoal,
}

impl StoreKey {
    pub fn name(&self) -> &'static str {
        match self {
            StoreKey::FoodEntries => "foodEntries",
            StoreKey::WaterState => "waterState",
            StoreKey::WaterIntake => "waterIntake",
            StoreKey::WaterGoal => "waterGoal",
        }
    }

    /// Returns the filename used by the file-backed store.
    pub fn filename(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
