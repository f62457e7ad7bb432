code_table! {
    /// Character slots, playable and otherwise.
    pub enum CharacterId {
        Terra = 1,
        Wedge = 2,
        Biggs = 3,
        Kefka = 4,
        Locke = 5,
        Moglin = 6,
        Mogret = 7,
        Moggie = 8,
        Molulu = 9,
        Moghan = 10,
        Moguel = 11,
        Mogsy = 12,
        Mogwin = 13,
        Mugmug = 14,
        Cosmog = 15,
        Mog = 16,
        Edgar = 17,
        Sabin = 18,
        Shadow = 19,
        Banon = 20,
        /// Mog before he joins the party
        MogNpc = 21,
        Celes = 22,
        Cyan = 23,
        /// Displayed in game as "??????"
        Mystery = 24,
        Gau = 25,
        Setzer = 26,
        Maduin = 27,
        Strago = 28,
        Relm = 29,
        Leo = 30,
        Gestahl = 31,
        Gogo = 32,
        Umaro = 33,
    }
}
