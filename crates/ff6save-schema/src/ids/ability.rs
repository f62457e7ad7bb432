code_table! {
    /// Learnable ability identifiers, grouped by the command that uses them.
    pub enum AbilityId {
        // Magic
        Cure = 31,
        Cura = 32,
        Curaga = 33,
        Raise = 34,
        Arise = 35,
        Poisona = 36,
        Esuna = 37,
        Regen = 38,
        Reraise = 39,
        Fire = 40,
        Blizzard = 41,
        Thunder = 42,
        Poison = 43,
        Drain = 44,
        Fira = 45,
        Blizzara = 46,
        Thundara = 47,
        Bio = 48,
        Firaga = 49,
        Blizzaga = 50,
        Thundaga = 51,
        Break = 52,
        Death = 53,
        Holy = 54,
        Flare = 55,
        Gravity = 56,
        Graviga = 57,
        Banish = 58,
        Meteor = 59,
        Ultima = 60,
        Quake = 61,
        Tornado = 62,
        Meltdown = 63,
        Libra = 64,
        Slow = 65,
        Rasp = 66,
        Silence = 67,
        Protect = 68,
        Sleep = 69,
        Confuse = 70,
        Haste = 71,
        Stop = 72,
        Berserk = 73,
        Float = 74,
        Imp = 75,
        Reflect = 76,
        Shell = 77,
        Vanish = 78,
        Hastega = 79,
        Slowga = 80,
        Osmose = 81,
        Teleport = 82,
        Quick = 83,
        Dispel = 84,

        // Bushido
        Fang = 124,
        Sky = 125,
        Tiger = 126,
        Flurry = 127,
        Dragon = 128,
        Eclipse = 129,
        Tempest = 130,
        Oblivion = 131,

        // Blitz
        RagingFist = 132,
        AuraCannon = 133,
        MeteorStrike = 134,
        RisingPhoenix = 135,
        Chakra = 136,
        RazorGale = 137,
        SoulSpiral = 138,
        PhantomRush = 139,

        // Lore
        Ability16 = 140,
        Ability17 = 141,
        Ability18 = 142,
        AquaBreath = 143,
        Ability20 = 144,
        Ability21 = 145,
        Ability22 = 146,
        RevengeBlast = 147,
        Ability24 = 148,
        Ability25 = 149,
        Ability26 = 150,
        Ability27 = 151,
        Ability28 = 152,
        Ability29 = 153,
        Ability30 = 154,
        Ability31 = 155,
        Ability32 = 156,
        Ability33 = 157,
        Transfusion = 158,
        Ability35 = 159,
        Stone = 160,
        Ability37 = 161,
        Ability38 = 162,
        Ability39 = 163,
        Ability40 = 164,
        Ability41 = 165,
        Ability42 = 166,
        Ability43 = 167,
        Ability44 = 168,
        Ability45 = 169,
        Ability46 = 170,
        Ability47 = 171,

        Ability48 = 201,
        Ability49 = 210,
        Ability50 = 211,
        Ability51 = 212,
        Ability52 = 213,
        Ability53 = 214,
        Ability54 = 215,
        Ability55 = 216,
        Ability56 = 218,
        Ability57 = 219,
        Ability58 = 220,
        Ability59 = 221,
        Ability60 = 222,
        Ability61 = 223,
        Ability62 = 224,
        Ability63 = 225,
        Ability64 = 228,
        Ability65 = 229,
        Ability66 = 230,
        Ability67 = 231,
        Ability68 = 232,
        Ability69 = 233,
        Ability70 = 234,
        Ability71 = 235,
        Ability72 = 236,
        Ability73 = 237,
        Ability74 = 238,
        Ability75 = 239,
        Ability76 = 253,
        Ability77 = 259,
        Ability78 = 292,

        // Rage
        RageGuard = 800,
        RageImperialSoldier = 801,
        RageTemplar = 802,
        RageNinja = 803,
        RageSamurai = 804,
        RageBorghese = 805,
        RageMagnaRoaderPurple = 806,
        RageYojimbo = 807,
        RageCloud = 808,
        RageMisty = 809,
        RageAlJabr = 810,
        RageZaghrem = 811,
        RageApocrypha = 812,
        RageDarkForce = 813,
        RageAngelWhisper = 814,
        RageOversoul = 815,
        RageSkeletalHorror = 816,
        RageCommander = 817,
        RageMu = 818,
        RageWererat = 819,
        RageMugbear = 820,
        RageBelmodar = 821,
        RageMuudSuud = 822,
        RageLeafBunny = 823,
        RageStrayCat = 824,
        RageSilverLobo = 825,
        RageDoberman = 826,
        RageMegalodoth = 827,
        RageFidor = 828,
        RageBriareus = 829,
        RageSuriander = 830,
        RageChimera = 831,
        RageBehemoth = 832,
        RageFafnir = 833,
        RageLesserLopros = 834,
        RageFossilDragon = 835,
        RageHolyDragon = 836,
        RageFiendDragon = 837,
        RageBrachiosaur = 838,
        RageTyrannosaur = 839,
        RageDarkwind = 840,
        RageAepyornis = 841,
        RageVulture = 842,
        RageVasegiatta = 843,
        RageZokka = 844,
        RageTrapper = 845,
        RageHornet = 846,
        RageNettlehopper = 847,
        RageDeltaBeetle = 848,
        RageKillerMantis = 849,
        RageTrillium = 850,
        RageRafflesia = 851,
        RageTumbleweed = 852,
        RageVampireThorn = 853,
        RageCartagra = 854,
        RageNautiloid = 855,
        Rage0 = 856,
        RageExocite = 857,
        RageAnguiform = 858,
        RageLeapFrog = 859,
        RageLizard = 860,
        RageLitworChicken = 861,
        RageSlagworm = 862,
        RageHellsRider = 863,
        RageOnionKnight = 864,
        Rage1 = 865,
        RageMagitekArmor = 866,
        RageSkyArmor = 867,
        RageSatellite = 868,
        RageArmoredWeapon = 869,
        RageSpritzer = 870,
        RageFlan = 871,
        RageOutcast = 872,
        RageHumpty = 873,
        RageBrainpan = 874,
        RageCruller = 875,
        RageCactuar = 876,
        RageBandit = 877,
        RageHarvester = 878,
        RageBomb = 879,
        RageStillLife = 880,
        RageLunatys = 881,
        RageVeilDancer = 882,
        RageHillGigas = 883,
        RageTonberry = 884,
        RageMagicUrn = 885,
        RageMover = 886,
        RageFigaroLizard = 887,
        RageDevoahan = 888,
        RageAspiran = 889,
        RageGhost = 890,
        RageCrawler = 891,
        RageSandRay = 892,
        RageAlacran = 893,
        RageActinian = 894,
        RageSandhorse = 895,
        RageDarkside = 896,
        RageMalboro = 897,
        RageUrok = 898,
        RageFoper = 899,
        RageGuardLeader = 900,
        RageCorporal = 901,
        RageGeneral = 902,
        RageCovert = 903,
        RageKamui = 904,
        RageWarlock = 905,
        RageCherry = 906,
        RageJoker = 907,
        RageIronFist = 908,
        RageDevil = 909,
        RageProvoker = 910,
        RageCloudwraith = 911,
        RageMahadeva = 912,
        RageVectorHound = 913,
        RagePeeper = 914,
        RageStunner = 915,
        RageSorath = 916,
        RageDestroyer = 917,
        RageChippirabbit = 918,
        RageCoeurlCat = 919,
        RageBloodfang = 920,
        RageHuntingHound = 921,
        RageGorgias = 922,
        RageDon = 923,
        RageMurussu = 924,
        RageWartpuck = 925,
        RageGorgimera = 926,
        RageBehemothKing = 927,
        RageVectorLythos = 928,
        RageWyvern = 929,
        RageZombieDragon = 930,
        RageDragon = 931,
        RagePrimevalDragon = 932,
        RageWeredragon = 933,
        RageCirpius = 934,
        RageSprinter = 935,
        RageLenergia = 936,
        RageMarchosias = 937,
        RageGloomwind = 938,
        RageDropper = 939,
        RageRockWasp = 940,
        RageGrasswyrm = 941,
        RageLuridan = 942,
        RageTwinscythe = 943,
        RageParaladia = 944,
        RageExoray = 945,
        RageCrusher = 946,
        RageOuroboros = 947,
        RageAcrophies = 948,
        RageSchmidt = 949,
        RageDevourer = 950,
        RageCancer = 951,
        RageGigantoad = 952,
        RageBasilisk = 953,
        RageMedusaChicken = 954,
        RageLandworm = 955,
        RageTestRider = 956,
        RagePlutoArmor = 957,
        RageOnionDasher = 958,
        RageHeavyArmor = 959,
        RageChase = 960,
        RageGamma = 961,
        RagePoplium = 962,
        RageIntanger = 963,
        RageMisfit = 964,
        RageCreature = 965,
        RageEnuo = 966,
        RageDeepeye = 967,
        RageUnseelie = 968,
        RageNeckHunter = 969,
        RageGrenade = 970,
        RageAlluringRider = 971,
        RagePandora = 972,
        RageBladeDancer = 973,
        RageGigantos = 974,
        RageMagnaRoaderRed = 975,
        RageLycaon = 976,
        RageParasite = 977,
        RageMoonform = 978,
        RageSpecter = 979,
        RageGreatMalboro = 980,
        RageBonnacon = 981,
        RageOceanus = 982,
        RageLivingDead = 983,
        RageFace = 984,
        RageOutsider = 985,
        RageCoco = 986,
        RageZeveak = 987,
        RageNightwalker = 988,
        RageDemonKnight = 989,
        RageImperialElite = 990,
        RageDesertHare = 991,
        RageWizard = 992,
        RageDevilFist = 993,
        RageIlluyankas = 994,
        RageSergeant = 995,
        RageAspidochelon = 996,
        RageKnotty = 997,
        RageLunaWolf = 998,
        RageBelzecue = 999,
        RageCaladrius = 1000,
        RageTzakmaqiel = 1001,
        RageLukhavi = 1002,
        RageEukaryote = 1003,
        RageLandGrillon = 1004,
        RageGoetia = 1005,
        RageGreaterMantis = 1006,
        RageBogy = 1007,
        RagePurusa = 1008,
        RageBlackDragon = 1009,
        RageAdamankary = 1010,
        RageDante = 1011,
        RagePlatinumDragon = 1012,
        RageDuelArmor = 1013,
        RagePsycho = 1014,
        RageMousse = 1015,
        RageShamblingCorpse = 1016,
        RagePunishe = 1017,
        RageBalloon = 1018,
        RageGobbledygook = 1019,
        RageGreatBehemoth = 1020,
        RageScorpion = 1021,
        RageChaosDragon = 1022,
        RageSpitfire = 1023,
        RageVectorChimera = 1024,
        RageLich = 1025,
        RageRukh = 1026,
        RageMagnaRoaderYellow = 1027,
        RageBug = 1028,
        RageSeaflower = 1029,
        RageFortis = 1030,
        RageVenobennu = 1031,
        RageGalypdes = 1032,
        RageJunk = 1033,
        RageMandrake = 1034,
        RageValero = 1035,
        RageAmduscias = 1036,
        RageNecromancer = 1037,
        RageGlasyaLabolas = 1038,
        RageMagnaRoaderBrown = 1039,
        RageWildRat = 1040,
        RageGoldBear = 1041,
        RageInnoSent = 1042,
        RageClymenus = 1043,
        RageGarm = 1044,
        RageDaedalus = 1045,
        RageBaalzephon = 1046,
        RageAhriman = 1047,
        RageDeathMachine = 1048,
        RageMetalHitman = 1049,
        RageIo = 1050,

        Ability327 = 1051,
        Ability328 = 1052,
        Ability329 = 1053,
        Ability330 = 1054,

        Ability331 = 1532,
    }
}

code_table! {
    /// Ability categories used as keys of a character's ability dictionary.
    pub enum AbilityType {
        Magic = 7,
        Bushido = 12,
        Blitz = 15,
        Lore = 17,
        Dance = 22,
        Rage = 23,
        Unknown = 26,
    }
}
