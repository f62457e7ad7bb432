code_table! {
    /// Indexes into the `global` integer array of the data storage document.
    pub enum GlobalValuesKey {
        /// Battles fought with the Cursed Shield equipped
        CursedShieldBattles = 9,
    }
}

impl GlobalValuesKey {
    pub fn index(self) -> usize {
        self.code() as usize
    }
}
