code_table! {
    /// Inventory and equipment item identifiers.
    ///
    /// Only a handful of entries carry a symbolic name; the rest keep their
    /// raw code. This is the numbering observed in current saves.
    pub enum ItemId {
        Item0 = 0,
        Item1 = 1,
        Item2 = 2,
        Item3 = 3,
        Item4 = 4,
        Item5 = 5,
        Item6 = 6,
        Item7 = 7,
        Item8 = 8,
        Item9 = 9,
        Item10 = 10,
        Item11 = 11,
        Item12 = 12,
        Item13 = 13,
        Item14 = 14,
        Item15 = 15,
        Item16 = 16,
        Item17 = 17,
        Item18 = 18,
        Item19 = 19,
        Item20 = 20,
        Item21 = 21,
        Item22 = 22,
        Item23 = 23,
        Item24 = 24,
        Item25 = 25,
        Item26 = 26,
        Item27 = 27,
        Item28 = 28,
        Item29 = 29,
        Item30 = 30,
        Item31 = 31,
        Item32 = 32,
        Item33 = 33,
        Item34 = 34,
        Item35 = 35,
        Item36 = 36,
        Item37 = 37,
        Item38 = 38,
        Item39 = 39,
        Item40 = 40,
        Item41 = 41,
        Item42 = 42,
        Item43 = 43,
        Item44 = 44,
        Item45 = 45,
        Item46 = 46,
        Item47 = 47,
        Item48 = 48,
        Item49 = 49,
        Item50 = 50,
        Item51 = 51,
        Item52 = 52,
        Item53 = 53,
        Item54 = 54,
        Item55 = 55,
        Item56 = 56,
        Item57 = 57,
        Item58 = 58,
        Item59 = 59,
        Item60 = 60,
        Item61 = 61,
        Item62 = 62,
        Item63 = 63,
        Item64 = 64,
        Item65 = 65,
        Item66 = 66,
        Item67 = 67,
        Item68 = 68,
        Item69 = 69,
        Item70 = 70,
        Item71 = 71,
        Item72 = 72,
        Item73 = 73,
        Item74 = 74,
        Item75 = 75,
        Item76 = 76,
        Item77 = 77,
        Item78 = 78,
        Item79 = 79,
        Item80 = 80,
        Item81 = 81,
        Item82 = 82,
        Item83 = 83,
        Item84 = 84,
        Item85 = 85,
        Item86 = 86,
        Item87 = 87,
        Item88 = 88,
        Item89 = 89,
        Item90 = 90,
        Item91 = 91,
        Item92 = 92,
        Item93 = 93,
        Item94 = 94,
        Item95 = 95,
        Item96 = 96,
        Item97 = 97,
        Item98 = 98,
        Item99 = 99,
        Item100 = 100,
        Item101 = 101,
        Item102 = 102,
        Item103 = 103,
        Item104 = 104,
        Item105 = 105,
        Item106 = 106,
        Item107 = 107,
        Item108 = 108,
        Item109 = 109,
        Item110 = 110,
        Item111 = 111,
        Item112 = 112,
        Item113 = 113,
        Item114 = 114,
        Item115 = 115,
        Item116 = 116,
        Item117 = 117,
        Item118 = 118,
        Zantetsuken = 119,
        Lightbringer = 120,
        Item121 = 121,
        Item122 = 122,
        Item123 = 123,
        Item124 = 124,
        Item125 = 125,
        Item126 = 126,
        Item127 = 127,
        Item128 = 128,
        Item129 = 129,
        Item130 = 130,
        Item131 = 131,
        Item132 = 132,
        Item133 = 133,
        Item134 = 134,
        Item135 = 135,
        Kagenui = 136,
        Item137 = 137,
        Item138 = 138,
        Item139 = 139,
        Item140 = 140,
        Item141 = 141,
        Item142 = 142,
        Item143 = 143,
        Item144 = 144,
        Item145 = 145,
        Item146 = 146,
        Item147 = 147,
        Item148 = 148,
        Item149 = 149,
        Item150 = 150,
        Item151 = 151,
        Item152 = 152,
        Item153 = 153,
        Item154 = 154,
        Item155 = 155,
        Item156 = 156,
        Item157 = 157,
        Item158 = 158,
        Item159 = 159,
        Item160 = 160,
        Item161 = 161,
        Item162 = 162,
        Item163 = 163,
        Item164 = 164,
        Item165 = 165,
        Item166 = 166,
        Item167 = 167,
        Item168 = 168,
        Item169 = 169,
        Item170 = 170,
        Item171 = 171,
        Item172 = 172,
        Item173 = 173,
        Item174 = 174,
        Item175 = 175,
        Item176 = 176,
        Item177 = 177,
        Item178 = 178,
        Item179 = 179,
        Item180 = 180,
        Item181 = 181,
        Item182 = 182,
        TigerFang = 183,
        Item184 = 184,
        Item185 = 185,
        Item186 = 186,
        Item187 = 187,
        Item188 = 188,
        Item189 = 189,
        Item190 = 190,
        Item191 = 191,
        Item192 = 192,
        Item193 = 193,
        Item194 = 194,
        Item195 = 195,
        Item196 = 196,
        Item197 = 197,
        Item198 = 198,
        Item199 = 199,
        Item200 = 200,
        Item201 = 201,
        Item202 = 202,
        Item203 = 203,
        Item204 = 204,
        AegisShield = 205,
        Item206 = 206,
        FlameShield = 207,
        Item208 = 208,
        Item209 = 209,
        Item210 = 210,
        GenjiShield = 211,
        Item212 = 212,
        CursedShield = 213,
        Item214 = 214,
        Item215 = 215,
        Item216 = 216,
        Item217 = 217,
        Item218 = 218,
        Item219 = 219,
        Item220 = 220,
        Item221 = 221,
        Item222 = 222,
        Item223 = 223,
        Item224 = 224,
        Item225 = 225,
        Item226 = 226,
        Item227 = 227,
        Item228 = 228,
        Item229 = 229,
        Item230 = 230,
        Item231 = 231,
        Item232 = 232,
        Item233 = 233,
        RoyalCrown = 234,
        DiamondHelm = 235,
        Item236 = 236,
        CrystalHelm = 237,
        Item238 = 238,
        Item239 = 239,
        GenjiHelm = 240,
        Item241 = 241,
        Item242 = 242,
        Item243 = 243,
        Item244 = 244,
        Item245 = 245,
        Item246 = 246,
        Item247 = 247,
        Item248 = 248,
        Item249 = 249,
        Item250 = 250,
        Item251 = 251,
        Item252 = 252,
        Item253 = 253,
        Item254 = 254,
        Item255 = 255,
        Item256 = 256,
        Item257 = 257,
        Item258 = 258,
        RedJacket = 259,
        Item260 = 260,
        Item261 = 261,
        Item262 = 262,
        Item263 = 263,
        Item264 = 264,
        Item265 = 265,
        GenjiArmor = 266,
        Item267 = 267,
        Item268 = 268,
        Item269 = 269,
        Item270 = 270,
        Item271 = 271,
        Item272 = 272,
        Item273 = 273,
        Item274 = 274,
        Item275 = 275,
        Item276 = 276,
        Item277 = 277,
        Item278 = 278,
        Item279 = 279,
        Item280 = 280,
        Item281 = 281,
        Item282 = 282,
        Item283 = 283,
        Item284 = 284,
        HermesSandals = 285,
        Item286 = 286,
        Item287 = 287,
        Item288 = 288,
        Item289 = 289,
        Item290 = 290,
        Item291 = 291,
        Item292 = 292,
        Item293 = 293,
        Item294 = 294,
        Item295 = 295,
        Item296 = 296,
        Item297 = 297,
        Item298 = 298,
        Item299 = 299,
        HerosRing = 300,
        Ribbon = 301,
        Item302 = 302,
        Item303 = 303,
        Item304 = 304,
        Celestriad = 305,
        Item306 = 306,
        Item307 = 307,
        Item308 = 308,
        HyperWrist = 309,
        MastersScroll = 310,
        Item311 = 311,
        Item312 = 312,
        Item313 = 313,
        Item314 = 314,
        Item315 = 315,
        Item316 = 316,
        Item317 = 317,
        Item318 = 318,
        Item319 = 319,
        Item320 = 320,
        Item321 = 321,
        Item322 = 322,
        Item323 = 323,
        AlarmEarring = 324,
        Item325 = 325,
        Item326 = 326,
        Item327 = 327,
        Item328 = 328,
        Item329 = 329,
        Item330 = 330,
        Item331 = 331,
        Item332 = 332,
        Item333 = 333,
        Item334 = 334,
        Item335 = 335,
        Item336 = 336,
        Item337 = 337,
        Item338 = 338,
        Item339 = 339,
        Item340 = 340,
        Item341 = 341,
        Item342 = 342,
        Item343 = 343,
        Item344 = 344,
        Item345 = 345,
        Item346 = 346,
        Item347 = 347,
        Item348 = 348,
        Item349 = 349,
    }
}
