use crate::poly::Poly;

// Entry `b` of `POLYk` is `b(x) * x^k mod P`, with `b` read in the reflected
// bit order used by `Poly`. These values define the fingerprint scheme; they
// are not derived at build time.

pub(crate) const POLY64: [Poly; 256] = [
    Poly::new(0x00000000, 0x00000000),
    Poly::new(0x02306fe7, 0x091d9b8f),
    Poly::new(0x0460dfce, 0x123b371e),
    Poly::new(0x0650b029, 0x1b26ac91),
    Poly::new(0x051d3ef7, 0x1704a73c),
    Poly::new(0x072d5110, 0x1e193cb3),
    Poly::new(0x017de139, 0x053f9022),
    Poly::new(0x034d8ede, 0x0c220bad),
    Poly::new(0x07e6fc85, 0x1d7b8778),
    Poly::new(0x05d69362, 0x14661cf7),
    Poly::new(0x0386234b, 0x0f40b066),
    Poly::new(0x01b64cac, 0x065d2be9),
    Poly::new(0x02fbc272, 0x0a7f2044),
    Poly::new(0x00cbad95, 0x0362bbcb),
    Poly::new(0x069b1dbc, 0x1844175a),
    Poly::new(0x04ab725b, 0x11598cd5),
    Poly::new(0x02117861, 0x0985c7f0),
    Poly::new(0x00211786, 0x00985c7f),
    Poly::new(0x0671a7af, 0x1bbef0ee),
    Poly::new(0x0441c848, 0x12a36b61),
    Poly::new(0x070c4696, 0x1e8160cc),
    Poly::new(0x053c2971, 0x179cfb43),
    Poly::new(0x036c9958, 0x0cba57d2),
    Poly::new(0x015cf6bf, 0x05a7cc5d),
    Poly::new(0x05f784e4, 0x14fe4088),
    Poly::new(0x07c7eb03, 0x1de3db07),
    Poly::new(0x01975b2a, 0x06c57796),
    Poly::new(0x03a734cd, 0x0fd8ec19),
    Poly::new(0x00eaba13, 0x03fae7b4),
    Poly::new(0x02dad5f4, 0x0ae77c3b),
    Poly::new(0x048a65dd, 0x11c1d0aa),
    Poly::new(0x06ba0a3a, 0x18dc4b25),
    Poly::new(0x0422f0c2, 0x130b8fe0),
    Poly::new(0x06129f25, 0x1a16146f),
    Poly::new(0x00422f0c, 0x0130b8fe),
    Poly::new(0x027240eb, 0x082d2371),
    Poly::new(0x013fce35, 0x040f28dc),
    Poly::new(0x030fa1d2, 0x0d12b353),
    Poly::new(0x055f11fb, 0x16341fc2),
    Poly::new(0x076f7e1c, 0x1f29844d),
    Poly::new(0x03c40c47, 0x0e700898),
    Poly::new(0x01f463a0, 0x076d9317),
    Poly::new(0x07a4d389, 0x1c4b3f86),
    Poly::new(0x0594bc6e, 0x1556a409),
    Poly::new(0x06d932b0, 0x1974afa4),
    Poly::new(0x04e95d57, 0x1069342b),
    Poly::new(0x02b9ed7e, 0x0b4f98ba),
    Poly::new(0x00898299, 0x02520335),
    Poly::new(0x063388a3, 0x1a8e4810),
    Poly::new(0x0403e744, 0x1393d39f),
    Poly::new(0x0253576d, 0x08b57f0e),
    Poly::new(0x0063388a, 0x01a8e481),
    Poly::new(0x032eb654, 0x0d8aef2c),
    Poly::new(0x011ed9b3, 0x049774a3),
    Poly::new(0x074e699a, 0x1fb1d832),
    Poly::new(0x057e067d, 0x16ac43bd),
    Poly::new(0x01d57426, 0x07f5cf68),
    Poly::new(0x03e51bc1, 0x0ee854e7),
    Poly::new(0x05b5abe8, 0x15cef876),
    Poly::new(0x0785c40f, 0x1cd363f9),
    Poly::new(0x04c84ad1, 0x10f16854),
    Poly::new(0x06f82536, 0x19ecf3db),
    Poly::new(0x00a8951f, 0x02ca5f4a),
    Poly::new(0x0298faf8, 0x0bd7c4c5),
    Poly::new(0x059960ef, 0x1565d6c0),
    Poly::new(0x07a90f08, 0x1c784d4f),
    Poly::new(0x01f9bf21, 0x075ee1de),
    Poly::new(0x03c9d0c6, 0x0e437a51),
    Poly::new(0x00845e18, 0x026171fc),
    Poly::new(0x02b431ff, 0x0b7cea73),
    Poly::new(0x04e481d6, 0x105a46e2),
    Poly::new(0x06d4ee31, 0x1947dd6d),
    Poly::new(0x027f9c6a, 0x081e51b8),
    Poly::new(0x004ff38d, 0x0103ca37),
    Poly::new(0x061f43a4, 0x1a2566a6),
    Poly::new(0x042f2c43, 0x1338fd29),
    Poly::new(0x0762a29d, 0x1f1af684),
    Poly::new(0x0552cd7a, 0x16076d0b),
    Poly::new(0x03027d53, 0x0d21c19a),
    Poly::new(0x013212b4, 0x043c5a15),
    Poly::new(0x0788188e, 0x1ce01130),
    Poly::new(0x05b87769, 0x15fd8abf),
    Poly::new(0x03e8c740, 0x0edb262e),
    Poly::new(0x01d8a8a7, 0x07c6bda1),
    Poly::new(0x02952679, 0x0be4b60c),
    Poly::new(0x00a5499e, 0x02f92d83),
    Poly::new(0x06f5f9b7, 0x19df8112),
    Poly::new(0x04c59650, 0x10c21a9d),
    Poly::new(0x006ee40b, 0x019b9648),
    Poly::new(0x025e8bec, 0x08860dc7),
    Poly::new(0x040e3bc5, 0x13a0a156),
    Poly::new(0x063e5422, 0x1abd3ad9),
    Poly::new(0x0573dafc, 0x169f3174),
    Poly::new(0x0743b51b, 0x1f82aafb),
    Poly::new(0x01130532, 0x04a4066a),
    Poly::new(0x03236ad5, 0x0db99de5),
    Poly::new(0x01bb902d, 0x066e5920),
    Poly::new(0x038bffca, 0x0f73c2af),
    Poly::new(0x05db4fe3, 0x14556e3e),
    Poly::new(0x07eb2004, 0x1d48f5b1),
    Poly::new(0x04a6aeda, 0x116afe1c),
    Poly::new(0x0696c13d, 0x18776593),
    Poly::new(0x00c67114, 0x0351c902),
    Poly::new(0x02f61ef3, 0x0a4c528d),
    Poly::new(0x065d6ca8, 0x1b15de58),
    Poly::new(0x046d034f, 0x120845d7),
    Poly::new(0x023db366, 0x092ee946),
    Poly::new(0x000ddc81, 0x003372c9),
    Poly::new(0x0340525f, 0x0c117964),
    Poly::new(0x01703db8, 0x050ce2eb),
    Poly::new(0x07208d91, 0x1e2a4e7a),
    Poly::new(0x0510e276, 0x1737d5f5),
    Poly::new(0x03aae84c, 0x0feb9ed0),
    Poly::new(0x019a87ab, 0x06f6055f),
    Poly::new(0x07ca3782, 0x1dd0a9ce),
    Poly::new(0x05fa5865, 0x14cd3241),
    Poly::new(0x06b7d6bb, 0x18ef39ec),
    Poly::new(0x0487b95c, 0x11f2a263),
    Poly::new(0x02d70975, 0x0ad40ef2),
    Poly::new(0x00e76692, 0x03c9957d),
    Poly::new(0x044c14c9, 0x129019a8),
    Poly::new(0x067c7b2e, 0x1b8d8227),
    Poly::new(0x002ccb07, 0x00ab2eb6),
    Poly::new(0x021ca4e0, 0x09b6b539),
    Poly::new(0x01512a3e, 0x0594be94),
    Poly::new(0x036145d9, 0x0c89251b),
    Poly::new(0x0531f5f0, 0x17af898a),
    Poly::new(0x07019a17, 0x1eb21205),
    Poly::new(0x06ee40b5, 0x19b96480),
    Poly::new(0x04de2f52, 0x10a4ff0f),
    Poly::new(0x028e9f7b, 0x0b82539e),
    Poly::new(0x00bef09c, 0x029fc811),
    Poly::new(0x03f37e42, 0x0ebdc3bc),
    Poly::new(0x01c311a5, 0x07a05833),
    Poly::new(0x0793a18c, 0x1c86f4a2),
    Poly::new(0x05a3ce6b, 0x159b6f2d),
    Poly::new(0x0108bc30, 0x04c2e3f8),
    Poly::new(0x0338d3d7, 0x0ddf7877),
    Poly::new(0x056863fe, 0x16f9d4e6),
    Poly::new(0x07580c19, 0x1fe44f69),
    Poly::new(0x041582c7, 0x13c644c4),
    Poly::new(0x0625ed20, 0x1adbdf4b),
    Poly::new(0x00755d09, 0x01fd73da),
    Poly::new(0x024532ee, 0x08e0e855),
    Poly::new(0x04ff38d4, 0x103ca370),
    Poly::new(0x06cf5733, 0x192138ff),
    Poly::new(0x009fe71a, 0x0207946e),
    Poly::new(0x02af88fd, 0x0b1a0fe1),
    Poly::new(0x01e20623, 0x0738044c),
    Poly::new(0x03d269c4, 0x0e259fc3),
    Poly::new(0x0582d9ed, 0x15033352),
    Poly::new(0x07b2b60a, 0x1c1ea8dd),
    Poly::new(0x0319c451, 0x0d472408),
    Poly::new(0x0129abb6, 0x045abf87),
    Poly::new(0x07791b9f, 0x1f7c1316),
    Poly::new(0x05497478, 0x16618899),
    Poly::new(0x0604faa6, 0x1a438334),
    Poly::new(0x04349541, 0x135e18bb),
    Poly::new(0x02642568, 0x0878b42a),
    Poly::new(0x00544a8f, 0x01652fa5),
    Poly::new(0x02ccb077, 0x0ab2eb60),
    Poly::new(0x00fcdf90, 0x03af70ef),
    Poly::new(0x06ac6fb9, 0x1889dc7e),
    Poly::new(0x049c005e, 0x119447f1),
    Poly::new(0x07d18e80, 0x1db64c5c),
    Poly::new(0x05e1e167, 0x14abd7d3),
    Poly::new(0x03b1514e, 0x0f8d7b42),
    Poly::new(0x01813ea9, 0x0690e0cd),
    Poly::new(0x052a4cf2, 0x17c96c18),
    Poly::new(0x071a2315, 0x1ed4f797),
    Poly::new(0x014a933c, 0x05f25b06),
    Poly::new(0x037afcdb, 0x0cefc089),
    Poly::new(0x00377205, 0x00cdcb24),
    Poly::new(0x02071de2, 0x09d050ab),
    Poly::new(0x0457adcb, 0x12f6fc3a),
    Poly::new(0x0667c22c, 0x1beb67b5),
    Poly::new(0x00ddc816, 0x03372c90),
    Poly::new(0x02eda7f1, 0x0a2ab71f),
    Poly::new(0x04bd17d8, 0x110c1b8e),
    Poly::new(0x068d783f, 0x18118001),
    Poly::new(0x05c0f6e1, 0x14338bac),
    Poly::new(0x07f09906, 0x1d2e1023),
    Poly::new(0x01a0292f, 0x0608bcb2),
    Poly::new(0x039046c8, 0x0f15273d),
    Poly::new(0x073b3493, 0x1e4cabe8),
    Poly::new(0x050b5b74, 0x17513067),
    Poly::new(0x035beb5d, 0x0c779cf6),
    Poly::new(0x016b84ba, 0x056a0779),
    Poly::new(0x02260a64, 0x09480cd4),
    Poly::new(0x00166583, 0x0055975b),
    Poly::new(0x0646d5aa, 0x1b733bca),
    Poly::new(0x0476ba4d, 0x126ea045),
    Poly::new(0x0377205a, 0x0cdcb240),
    Poly::new(0x01474fbd, 0x05c129cf),
    Poly::new(0x0717ff94, 0x1ee7855e),
    Poly::new(0x05279073, 0x17fa1ed1),
    Poly::new(0x066a1ead, 0x1bd8157c),
    Poly::new(0x045a714a, 0x12c58ef3),
    Poly::new(0x020ac163, 0x09e32262),
    Poly::new(0x003aae84, 0x00feb9ed),
    Poly::new(0x0491dcdf, 0x11a73538),
    Poly::new(0x06a1b338, 0x18baaeb7),
    Poly::new(0x00f10311, 0x039c0226),
    Poly::new(0x02c16cf6, 0x0a8199a9),
    Poly::new(0x018ce228, 0x06a39204),
    Poly::new(0x03bc8dcf, 0x0fbe098b),
    Poly::new(0x05ec3de6, 0x1498a51a),
    Poly::new(0x07dc5201, 0x1d853e95),
    Poly::new(0x0166583b, 0x055975b0),
    Poly::new(0x035637dc, 0x0c44ee3f),
    Poly::new(0x050687f5, 0x176242ae),
    Poly::new(0x0736e812, 0x1e7fd921),
    Poly::new(0x047b66cc, 0x125dd28c),
    Poly::new(0x064b092b, 0x1b404903),
    Poly::new(0x001bb902, 0x0066e592),
    Poly::new(0x022bd6e5, 0x097b7e1d),
    Poly::new(0x0680a4be, 0x1822f2c8),
    Poly::new(0x04b0cb59, 0x113f6947),
    Poly::new(0x02e07b70, 0x0a19c5d6),
    Poly::new(0x00d01497, 0x03045e59),
    Poly::new(0x039d9a49, 0x0f2655f4),
    Poly::new(0x01adf5ae, 0x063bce7b),
    Poly::new(0x07fd4587, 0x1d1d62ea),
    Poly::new(0x05cd2a60, 0x1400f965),
    Poly::new(0x0755d098, 0x1fd73da0),
    Poly::new(0x0565bf7f, 0x16caa62f),
    Poly::new(0x03350f56, 0x0dec0abe),
    Poly::new(0x010560b1, 0x04f19131),
    Poly::new(0x0248ee6f, 0x08d39a9c),
    Poly::new(0x00788188, 0x01ce0113),
    Poly::new(0x062831a1, 0x1ae8ad82),
    Poly::new(0x04185e46, 0x13f5360d),
    Poly::new(0x00b32c1d, 0x02acbad8),
    Poly::new(0x028343fa, 0x0bb12157),
    Poly::new(0x04d3f3d3, 0x10978dc6),
    Poly::new(0x06e39c34, 0x198a1649),
    Poly::new(0x05ae12ea, 0x15a81de4),
    Poly::new(0x079e7d0d, 0x1cb5866b),
    Poly::new(0x01cecd24, 0x07932afa),
    Poly::new(0x03fea2c3, 0x0e8eb175),
    Poly::new(0x0544a8f9, 0x1652fa50),
    Poly::new(0x0774c71e, 0x1f4f61df),
    Poly::new(0x01247737, 0x0469cd4e),
    Poly::new(0x031418d0, 0x0d7456c1),
    Poly::new(0x0059960e, 0x01565d6c),
    Poly::new(0x0269f9e9, 0x084bc6e3),
    Poly::new(0x043949c0, 0x136d6a72),
    Poly::new(0x06092627, 0x1a70f1fd),
    Poly::new(0x02a2547c, 0x0b297d28),
    Poly::new(0x00923b9b, 0x0234e6a7),
    Poly::new(0x06c28bb2, 0x19124a36),
    Poly::new(0x04f2e455, 0x100fd1b9),
    Poly::new(0x07bf6a8b, 0x1c2dda14),
    Poly::new(0x058f056c, 0x1530419b),
    Poly::new(0x03dfb545, 0x0e16ed0a),
    Poly::new(0x01efdaa2, 0x070b7685),
];

pub(crate) const POLY72: [Poly; 256] = [
    Poly::new(0x00000000, 0x00000000),
    Poly::new(0x8b1a6e29, 0x13fc2b96),
    Poly::new(0x1be85d39, 0x148a9e2d),
    Poly::new(0x90f23310, 0x0776b5bb),
    Poly::new(0x3a0c3b19, 0x1a67f55a),
    Poly::new(0xb1165530, 0x099bdecc),
    Poly::new(0x21e46620, 0x0eed6b77),
    Poly::new(0xaafe0809, 0x1d1140e1),
    Poly::new(0x79c4f759, 0x07bd23b4),
    Poly::new(0xf2de9970, 0x14410822),
    Poly::new(0x622caa60, 0x1337bd99),
    Poly::new(0xe936c449, 0x00cb960f),
    Poly::new(0x43c8cc40, 0x1ddad6ee),
    Poly::new(0xc8d2a269, 0x0e26fd78),
    Poly::new(0x58209179, 0x095048c3),
    Poly::new(0xd33aff50, 0x1aac6355),
    Poly::new(0xf389eeb2, 0x0f7a4768),
    Poly::new(0x7893809b, 0x1c866cfe),
    Poly::new(0xe861b38b, 0x1bf0d945),
    Poly::new(0x637bdda2, 0x080cf2d3),
    Poly::new(0xc985d5ab, 0x151db232),
    Poly::new(0x429fbb82, 0x06e199a4),
    Poly::new(0xd26d8892, 0x01972c1f),
    Poly::new(0x5977e6bb, 0x126b0789),
    Poly::new(0x8a4d19eb, 0x08c764dc),
    Poly::new(0x015777c2, 0x1b3b4f4a),
    Poly::new(0x91a544d2, 0x1c4dfaf1),
    Poly::new(0x1abf2afb, 0x0fb1d167),
    Poly::new(0xb04122f2, 0x12a09186),
    Poly::new(0x3b5b4cdb, 0x015cba10),
    Poly::new(0xaba97fcb, 0x062a0fab),
    Poly::new(0x20b311e2, 0x15d6243d),
    Poly::new(0xe713dd64, 0x1ef48ed1),
    Poly::new(0x6c09b34d, 0x0d08a547),
    Poly::new(0xfcfb805d, 0x0a7e10fc),
    Poly::new(0x77e1ee74, 0x19823b6a),
    Poly::new(0xdd1fe67d, 0x04937b8b),
    Poly::new(0x56058854, 0x176f501d),
    Poly::new(0xc6f7bb44, 0x1019e5a6),
    Poly::new(0x4dedd56d, 0x03e5ce30),
    Poly::new(0x9ed72a3d, 0x1949ad65),
    Poly::new(0x15cd4414, 0x0ab586f3),
    Poly::new(0x853f7704, 0x0dc33348),
    Poly::new(0x0e25192d, 0x1e3f18de),
    Poly::new(0xa4db1124, 0x032e583f),
    Poly::new(0x2fc17f0d, 0x10d273a9),
    Poly::new(0xbf334c1d, 0x17a4c612),
    Poly::new(0x34292234, 0x0458ed84),
    Poly::new(0x149a33d6, 0x118ec9b9),
    Poly::new(0x9f805dff, 0x0272e22f),
    Poly::new(0x0f726eef, 0x05045794),
    Poly::new(0x846800c6, 0x16f87c02),
    Poly::new(0x2e9608cf, 0x0be93ce3),
    Poly::new(0xa58c66e6, 0x18151775),
    Poly::new(0x357e55f6, 0x1f63a2ce),
    Poly::new(0xbe643bdf, 0x0c9f8958),
    Poly::new(0x6d5ec48f, 0x1633ea0d),
    Poly::new(0xe644aaa6, 0x05cfc19b),
    Poly::new(0x76b699b6, 0x02b97420),
    Poly::new(0xfdacf79f, 0x11455fb6),
    Poly::new(0x5752ff96, 0x0c541f57),
    Poly::new(0xdc4891bf, 0x1fa834c1),
    Poly::new(0x4cbaa2af, 0x18de817a),
    Poly::new(0xc7a0cc86, 0x0b22aaec),
    Poly::new(0xc3fb3ba3, 0x0e9bd4a3),
    Poly::new(0x48e1558a, 0x1d67ff35),
    Poly::new(0xd813669a, 0x1a114a8e),
    Poly::new(0x530908b3, 0x09ed6118),
    Poly::new(0xf9f700ba, 0x14fc21f9),
    Poly::new(0x72ed6e93, 0x07000a6f),
    Poly::new(0xe21f5d83, 0x0076bfd4),
    Poly::new(0x690533aa, 0x138a9442),
    Poly::new(0xba3fccfa, 0x0926f717),
    Poly::new(0x3125a2d3, 0x1adadc81),
    Poly::new(0xa1d791c3, 0x1dac693a),
    Poly::new(0x2acdffea, 0x0e5042ac),
    Poly::new(0x8033f7e3, 0x1341024d),
    Poly::new(0x0b2999ca, 0x00bd29db),
    Poly::new(0x9bdbaada, 0x07cb9c60),
    Poly::new(0x10c1c4f3, 0x1437b7f6),
    Poly::new(0x3072d511, 0x01e193cb),
    Poly::new(0xbb68bb38, 0x121db85d),
    Poly::new(0x2b9a8828, 0x156b0de6),
    Poly::new(0xa080e601, 0x06972670),
    Poly::new(0x0a7eee08, 0x1b866691),
    Poly::new(0x81648021, 0x087a4d07),
    Poly::new(0x1196b331, 0x0f0cf8bc),
    Poly::new(0x9a8cdd18, 0x1cf0d32a),
    Poly::new(0x49b62248, 0x065cb07f),
    Poly::new(0xc2ac4c61, 0x15a09be9),
    Poly::new(0x525e7f71, 0x12d62e52),
    Poly::new(0xd9441158, 0x012a05c4),
    Poly::new(0x73ba1951, 0x1c3b4525),
    Poly::new(0xf8a07778, 0x0fc76eb3),
    Poly::new(0x68524468, 0x08b1db08),
    Poly::new(0xe3482a41, 0x1b4df09e),
    Poly::new(0x24e8e6c7, 0x106f5a72),
    Poly::new(0xaff288ee, 0x039371e4),
    Poly::new(0x3f00bbfe, 0x04e5c45f),
    Poly::new(0xb41ad5d7, 0x1719efc9),
    Poly::new(0x1ee4ddde, 0x0a08af28),
    Poly::new(0x95feb3f7, 0x19f484be),
    Poly::new(0x050c80e7, 0x1e823105),
    Poly::new(0x8e16eece, 0x0d7e1a93),
    Poly::new(0x5d2c119e, 0x17d279c6),
    Poly::new(0xd6367fb7, 0x042e5250),
    Poly::new(0x46c44ca7, 0x0358e7eb),
    Poly::new(0xcdde228e, 0x10a4cc7d),
    Poly::new(0x67202a87, 0x0db58c9c),
    Poly::new(0xec3a44ae, 0x1e49a70a),
    Poly::new(0x7cc877be, 0x193f12b1),
    Poly::new(0xf7d21997, 0x0ac33927),
    Poly::new(0xd7610875, 0x1f151d1a),
    Poly::new(0x5c7b665c, 0x0ce9368c),
    Poly::new(0xcc89554c, 0x0b9f8337),
    Poly::new(0x47933b65, 0x1863a8a1),
    Poly::new(0xed6d336c, 0x0572e840),
    Poly::new(0x66775d45, 0x168ec3d6),
    Poly::new(0xf6856e55, 0x11f8766d),
    Poly::new(0x7d9f007c, 0x02045dfb),
    Poly::new(0xaea5ff2c, 0x18a83eae),
    Poly::new(0x25bf9105, 0x0b541538),
    Poly::new(0xb54da215, 0x0c22a083),
    Poly::new(0x3e57cc3c, 0x1fde8b15),
    Poly::new(0x94a9c435, 0x02cfcbf4),
    Poly::new(0x1fb3aa1c, 0x1133e062),
    Poly::new(0x8f41990c, 0x164555d9),
    Poly::new(0x045bf725, 0x05b97e4f),
    Poly::new(0x87f67746, 0x1d37a947),
    Poly::new(0x0cec196f, 0x0ecb82d1),
    Poly::new(0x9c1e2a7f, 0x09bd376a),
    Poly::new(0x17044456, 0x1a411cfc),
    Poly::new(0xbdfa4c5f, 0x07505c1d),
    Poly::new(0x36e02276, 0x14ac778b),
    Poly::new(0xa6121166, 0x13dac230),
    Poly::new(0x2d087f4f, 0x0026e9a6),
    Poly::new(0xfe32801f, 0x1a8a8af3),
    Poly::new(0x7528ee36, 0x0976a165),
    Poly::new(0xe5dadd26, 0x0e0014de),
    Poly::new(0x6ec0b30f, 0x1dfc3f48),
    Poly::new(0xc43ebb06, 0x00ed7fa9),
    Poly::new(0x4f24d52f, 0x1311543f),
    Poly::new(0xdfd6e63f, 0x1467e184),
    Poly::new(0x54cc8816, 0x079bca12),
    Poly::new(0x747f99f4, 0x124dee2f),
    Poly::new(0xff65f7dd, 0x01b1c5b9),
    Poly::new(0x6f97c4cd, 0x06c77002),
    Poly::new(0xe48daae4, 0x153b5b94),
    Poly::new(0x4e73a2ed, 0x082a1b75),
    Poly::new(0xc569ccc4, 0x1bd630e3),
    Poly::new(0x559bffd4, 0x1ca08558),
    Poly::new(0xde8191fd, 0x0f5caece),
    Poly::new(0x0dbb6ead, 0x15f0cd9b),
    Poly::new(0x86a10084, 0x060ce60d),
    Poly::new(0x16533394, 0x017a53b6),
    Poly::new(0x9d495dbd, 0x12867820),
    Poly::new(0x37b755b4, 0x0f9738c1),
    Poly::new(0xbcad3b9d, 0x1c6b1357),
    Poly::new(0x2c5f088d, 0x1b1da6ec),
    Poly::new(0xa74566a4, 0x08e18d7a),
    Poly::new(0x60e5aa22, 0x03c32796),
    Poly::new(0xebffc40b, 0x103f0c00),
    Poly::new(0x7b0df71b, 0x1749b9bb),
    Poly::new(0xf0179932, 0x04b5922d),
    Poly::new(0x5ae9913b, 0x19a4d2cc),
    Poly::new(0xd1f3ff12, 0x0a58f95a),
    Poly::new(0x4101cc02, 0x0d2e4ce1),
    Poly::new(0xca1ba22b, 0x1ed26777),
    Poly::new(0x19215d7b, 0x047e0422),
    Poly::new(0x923b3352, 0x17822fb4),
    Poly::new(0x02c90042, 0x10f49a0f),
    Poly::new(0x89d36e6b, 0x0308b199),
    Poly::new(0x232d6662, 0x1e19f178),
    Poly::new(0xa837084b, 0x0de5daee),
    Poly::new(0x38c53b5b, 0x0a936f55),
    Poly::new(0xb3df5572, 0x196f44c3),
    Poly::new(0x936c4490, 0x0cb960fe),
    Poly::new(0x18762ab9, 0x1f454b68),
    Poly::new(0x888419a9, 0x1833fed3),
    Poly::new(0x039e7780, 0x0bcfd545),
    Poly::new(0xa9607f89, 0x16de95a4),
    Poly::new(0x227a11a0, 0x0522be32),
    Poly::new(0xb28822b0, 0x02540b89),
    Poly::new(0x39924c99, 0x11a8201f),
    Poly::new(0xeaa8b3c9, 0x0b04434a),
    Poly::new(0x61b2dde0, 0x18f868dc),
    Poly::new(0xf140eef0, 0x1f8edd67),
    Poly::new(0x7a5a80d9, 0x0c72f6f1),
    Poly::new(0xd0a488d0, 0x1163b610),
    Poly::new(0x5bbee6f9, 0x029f9d86),
    Poly::new(0xcb4cd5e9, 0x05e9283d),
    Poly::new(0x4056bbc0, 0x161503ab),
    Poly::new(0x440d4ce5, 0x13ac7de4),
    Poly::new(0xcf1722cc, 0x00505672),
    Poly::new(0x5fe511dc, 0x0726e3c9),
    Poly::new(0xd4ff7ff5, 0x14dac85f),
    Poly::new(0x7e0177fc, 0x09cb88be),
    Poly::new(0xf51b19d5, 0x1a37a328),
    Poly::new(0x65e92ac5, 0x1d411693),
    Poly::new(0xeef344ec, 0x0ebd3d05),
    Poly::new(0x3dc9bbbc, 0x14115e50),
    Poly::new(0xb6d3d595, 0x07ed75c6),
    Poly::new(0x2621e685, 0x009bc07d),
    Poly::new(0xad3b88ac, 0x1367ebeb),
    Poly::new(0x07c580a5, 0x0e76ab0a),
    Poly::new(0x8cdfee8c, 0x1d8a809c),
    Poly::new(0x1c2ddd9c, 0x1afc3527),
    Poly::new(0x9737b3b5, 0x09001eb1),
    Poly::new(0xb784a257, 0x1cd63a8c),
    Poly::new(0x3c9ecc7e, 0x0f2a111a),
    Poly::new(0xac6cff6e, 0x085ca4a1),
    Poly::new(0x27769147, 0x1ba08f37),
    Poly::new(0x8d88994e, 0x06b1cfd6),
    Poly::new(0x0692f767, 0x154de440),
    Poly::new(0x9660c477, 0x123b51fb),
    Poly::new(0x1d7aaa5e, 0x01c77a6d),
    Poly::new(0xce40550e, 0x1b6b1938),
    Poly::new(0x455a3b27, 0x089732ae),
    Poly::new(0xd5a80837, 0x0fe18715),
    Poly::new(0x5eb2661e, 0x1c1dac83),
    Poly::new(0xf44c6e17, 0x010cec62),
    Poly::new(0x7f56003e, 0x12f0c7f4),
    Poly::new(0xefa4332e, 0x1586724f),
    Poly::new(0x64be5d07, 0x067a59d9),
    Poly::new(0xa31e9181, 0x0d58f335),
    Poly::new(0x2804ffa8, 0x1ea4d8a3),
    Poly::new(0xb8f6ccb8, 0x19d26d18),
    Poly::new(0x33eca291, 0x0a2e468e),
    Poly::new(0x9912aa98, 0x173f066f),
    Poly::new(0x1208c4b1, 0x04c32df9),
    Poly::new(0x82faf7a1, 0x03b59842),
    Poly::new(0x09e09988, 0x1049b3d4),
    Poly::new(0xdada66d8, 0x0ae5d081),
    Poly::new(0x51c008f1, 0x1919fb17),
    Poly::new(0xc1323be1, 0x1e6f4eac),
    Poly::new(0x4a2855c8, 0x0d93653a),
    Poly::new(0xe0d65dc1, 0x108225db),
    Poly::new(0x6bcc33e8, 0x037e0e4d),
    Poly::new(0xfb3e00f8, 0x0408bbf6),
    Poly::new(0x70246ed1, 0x17f49060),
    Poly::new(0x50977f33, 0x0222b45d),
    Poly::new(0xdb8d111a, 0x11de9fcb),
    Poly::new(0x4b7f220a, 0x16a82a70),
    Poly::new(0xc0654c23, 0x055401e6),
    Poly::new(0x6a9b442a, 0x18454107),
    Poly::new(0xe1812a03, 0x0bb96a91),
    Poly::new(0x71731913, 0x0ccfdf2a),
    Poly::new(0xfa69773a, 0x1f33f4bc),
    Poly::new(0x2953886a, 0x059f97e9),
    Poly::new(0xa249e643, 0x1663bc7f),
    Poly::new(0x32bbd553, 0x111509c4),
    Poly::new(0xb9a1bb7a, 0x02e92252),
    Poly::new(0x135fb373, 0x1ff862b3),
    Poly::new(0x9845dd5a, 0x0c044925),
    Poly::new(0x08b7ee4a, 0x0b72fc9e),
    Poly::new(0x83ad8063, 0x188ed708),
];

pub(crate) const POLY80: [Poly; 256] = [
    Poly::new(0x00000000, 0x00000000),
    Poly::new(0x977f79ce, 0x077e6f3c),
    Poly::new(0x2efef39c, 0x0efcde79),
    Poly::new(0xb9818a52, 0x0982b145),
    Poly::new(0x5dfde738, 0x1df9bcf2),
    Poly::new(0xca829ef6, 0x1a87d3ce),
    Poly::new(0x730314a4, 0x1305628b),
    Poly::new(0xe47c6d6a, 0x147b0db7),
    Poly::new(0xb6274f1b, 0x0881b0e4),
    Poly::new(0x215836d5, 0x0fffdfd8),
    Poly::new(0x98d9bc87, 0x067d6e9d),
    Poly::new(0x0fa6c549, 0x010301a1),
    Poly::new(0xebdaa823, 0x15780c16),
    Poly::new(0x7ca5d1ed, 0x1206632a),
    Poly::new(0xc5245bbf, 0x1b84d26f),
    Poly::new(0x525b2271, 0x1cfabd53),
    Poly::new(0x6c4e9e36, 0x110361c9),
    Poly::new(0xfb31e7f8, 0x167d0ef5),
    Poly::new(0x42b06daa, 0x1fffbfb0),
    Poly::new(0xd5cf1464, 0x1881d08c),
    Poly::new(0x31b3790e, 0x0cfadd3b),
    Poly::new(0xa6cc00c0, 0x0b84b207),
    Poly::new(0x1f4d8a92, 0x02060342),
    Poly::new(0x8832f35c, 0x05786c7e),
    Poly::new(0xda69d12d, 0x1982d12d),
    Poly::new(0x4d16a8e3, 0x1efcbe11),
    Poly::new(0xf49722b1, 0x177e0f54),
    Poly::new(0x63e85b7f, 0x10006068),
    Poly::new(0x87943615, 0x047b6ddf),
    Poly::new(0x10eb4fdb, 0x030502e3),
    Poly::new(0xa96ac589, 0x0a87b3a6),
    Poly::new(0x3e15bc47, 0x0df9dc9a),
    Poly::new(0xd541bd07, 0x11740a92),
    Poly::new(0x423ec4c9, 0x160a65ae),
    Poly::new(0xfbbf4e9b, 0x1f88d4eb),
    Poly::new(0x6cc03755, 0x18f6bbd7),
    Poly::new(0x88bc5a3f, 0x0c8db660),
    Poly::new(0x1fc323f1, 0x0bf3d95c),
    Poly::new(0xa642a9a3, 0x02716819),
    Poly::new(0x313dd06d, 0x050f0725),
    Poly::new(0x6366f21c, 0x19f5ba76),
    Poly::new(0xf4198bd2, 0x1e8bd54a),
    Poly::new(0x4d980180, 0x1709640f),
    Poly::new(0xdae7784e, 0x10770b33),
    Poly::new(0x3e9b1524, 0x040c0684),
    Poly::new(0xa9e46cea, 0x037269b8),
    Poly::new(0x1065e6b8, 0x0af0d8fd),
    Poly::new(0x871a9f76, 0x0d8eb7c1),
    Poly::new(0xb90f2331, 0x00776b5b),
    Poly::new(0x2e705aff, 0x07090467),
    Poly::new(0x97f1d0ad, 0x0e8bb522),
    Poly::new(0x008ea963, 0x09f5da1e),
    Poly::new(0xe4f2c409, 0x1d8ed7a9),
    Poly::new(0x738dbdc7, 0x1af0b895),
    Poly::new(0xca0c3795, 0x137209d0),
    Poly::new(0x5d734e5b, 0x140c66ec),
    Poly::new(0x0f286c2a, 0x08f6dbbf),
    Poly::new(0x985715e4, 0x0f88b483),
    Poly::new(0x21d69fb6, 0x060a05c6),
    Poly::new(0xb6a9e678, 0x01746afa),
    Poly::new(0x52d58b12, 0x150f674d),
    Poly::new(0xc5aaf2dc, 0x12710871),
    Poly::new(0x7c2b788e, 0x1bf3b934),
    Poly::new(0xeb540140, 0x1c8dd608),
    Poly::new(0xa75ffb65, 0x119adc25),
    Poly::new(0x302082ab, 0x16e4b319),
    Poly::new(0x89a108f9, 0x1f66025c),
    Poly::new(0x1ede7137, 0x18186d60),
    Poly::new(0xfaa21c5d, 0x0c6360d7),
    Poly::new(0x6ddd6593, 0x0b1d0feb),
    Poly::new(0xd45cefc1, 0x029fbeae),
    Poly::new(0x4323960f, 0x05e1d192),
    Poly::new(0x1178b47e, 0x191b6cc1),
    Poly::new(0x8607cdb0, 0x1e6503fd),
    Poly::new(0x3f8647e2, 0x17e7b2b8),
    Poly::new(0xa8f93e2c, 0x1099dd84),
    Poly::new(0x4c855346, 0x04e2d033),
    Poly::new(0xdbfa2a88, 0x039cbf0f),
    Poly::new(0x627ba0da, 0x0a1e0e4a),
    Poly::new(0xf504d914, 0x0d606176),
    Poly::new(0xcb116553, 0x0099bdec),
    Poly::new(0x5c6e1c9d, 0x07e7d2d0),
    Poly::new(0xe5ef96cf, 0x0e656395),
    Poly::new(0x7290ef01, 0x091b0ca9),
    Poly::new(0x96ec826b, 0x1d60011e),
    Poly::new(0x0193fba5, 0x1a1e6e22),
    Poly::new(0xb81271f7, 0x139cdf67),
    Poly::new(0x2f6d0839, 0x14e2b05b),
    Poly::new(0x7d362a48, 0x08180d08),
    Poly::new(0xea495386, 0x0f666234),
    Poly::new(0x53c8d9d4, 0x06e4d371),
    Poly::new(0xc4b7a01a, 0x019abc4d),
    Poly::new(0x20cbcd70, 0x15e1b1fa),
    Poly::new(0xb7b4b4be, 0x129fdec6),
    Poly::new(0x0e353eec, 0x1b1d6f83),
    Poly::new(0x994a4722, 0x1c6300bf),
    Poly::new(0x721e4662, 0x00eed6b7),
    Poly::new(0xe5613fac, 0x0790b98b),
    Poly::new(0x5ce0b5fe, 0x0e1208ce),
    Poly::new(0xcb9fcc30, 0x096c67f2),
    Poly::new(0x2fe3a15a, 0x1d176a45),
    Poly::new(0xb89cd894, 0x1a690579),
    Poly::new(0x011d52c6, 0x13ebb43c),
    Poly::new(0x96622b08, 0x1495db00),
    Poly::new(0xc4390979, 0x086f6653),
    Poly::new(0x534670b7, 0x0f11096f),
    Poly::new(0xeac7fae5, 0x0693b82a),
    Poly::new(0x7db8832b, 0x01edd716),
    Poly::new(0x99c4ee41, 0x1596daa1),
    Poly::new(0x0ebb978f, 0x12e8b59d),
    Poly::new(0xb73a1ddd, 0x1b6a04d8),
    Poly::new(0x20456413, 0x1c146be4),
    Poly::new(0x1e50d854, 0x11edb77e),
    Poly::new(0x892fa19a, 0x1693d842),
    Poly::new(0x30ae2bc8, 0x1f116907),
    Poly::new(0xa7d15206, 0x186f063b),
    Poly::new(0x43ad3f6c, 0x0c140b8c),
    Poly::new(0xd4d246a2, 0x0b6a64b0),
    Poly::new(0x6d53ccf0, 0x02e8d5f5),
    Poly::new(0xfa2cb53e, 0x0596bac9),
    Poly::new(0xa877974f, 0x196c079a),
    Poly::new(0x3f08ee81, 0x1e1268a6),
    Poly::new(0x868964d3, 0x1790d9e3),
    Poly::new(0x11f61d1d, 0x10eeb6df),
    Poly::new(0xf58a7077, 0x0495bb68),
    Poly::new(0x62f509b9, 0x03ebd454),
    Poly::new(0xdb7483eb, 0x0a696511),
    Poly::new(0x4c0bfa25, 0x0d170a2d),
    Poly::new(0x436377a1, 0x1047714b),
    Poly::new(0xd41c0e6f, 0x17391e77),
    Poly::new(0x6d9d843d, 0x1ebbaf32),
    Poly::new(0xfae2fdf3, 0x19c5c00e),
    Poly::new(0x1e9e9099, 0x0dbecdb9),
    Poly::new(0x89e1e957, 0x0ac0a285),
    Poly::new(0x30606305, 0x034213c0),
    Poly::new(0xa71f1acb, 0x043c7cfc),
    Poly::new(0xf54438ba, 0x18c6c1af),
    Poly::new(0x623b4174, 0x1fb8ae93),
    Poly::new(0xdbbacb26, 0x163a1fd6),
    Poly::new(0x4cc5b2e8, 0x114470ea),
    Poly::new(0xa8b9df82, 0x053f7d5d),
    Poly::new(0x3fc6a64c, 0x02411261),
    Poly::new(0x86472c1e, 0x0bc3a324),
    Poly::new(0x113855d0, 0x0cbdcc18),
    Poly::new(0x2f2de997, 0x01441082),
    Poly::new(0xb8529059, 0x063a7fbe),
    Poly::new(0x01d31a0b, 0x0fb8cefb),
    Poly::new(0x96ac63c5, 0x08c6a1c7),
    Poly::new(0x72d00eaf, 0x1cbdac70),
    Poly::new(0xe5af7761, 0x1bc3c34c),
    Poly::new(0x5c2efd33, 0x12417209),
    Poly::new(0xcb5184fd, 0x153f1d35),
    Poly::new(0x990aa68c, 0x09c5a066),
    Poly::new(0x0e75df42, 0x0ebbcf5a),
    Poly::new(0xb7f45510, 0x07397e1f),
    Poly::new(0x208b2cde, 0x00471123),
    Poly::new(0xc4f741b4, 0x143c1c94),
    Poly::new(0x5388387a, 0x134273a8),
    Poly::new(0xea09b228, 0x1ac0c2ed),
    Poly::new(0x7d76cbe6, 0x1dbeadd1),
    Poly::new(0x9622caa6, 0x01337bd9),
    Poly::new(0x015db368, 0x064d14e5),
    Poly::new(0xb8dc393a, 0x0fcfa5a0),
    Poly::new(0x2fa340f4, 0x08b1ca9c),
    Poly::new(0xcbdf2d9e, 0x1ccac72b),
    Poly::new(0x5ca05450, 0x1bb4a817),
    Poly::new(0xe521de02, 0x12361952),
    Poly::new(0x725ea7cc, 0x1548766e),
    Poly::new(0x200585bd, 0x09b2cb3d),
    Poly::new(0xb77afc73, 0x0ecca401),
    Poly::new(0x0efb7621, 0x074e1544),
    Poly::new(0x99840fef, 0x00307a78),
    Poly::new(0x7df86285, 0x144b77cf),
    Poly::new(0xea871b4b, 0x133518f3),
    Poly::new(0x53069119, 0x1ab7a9b6),
    Poly::new(0xc479e8d7, 0x1dc9c68a),
    Poly::new(0xfa6c5490, 0x10301a10),
    Poly::new(0x6d132d5e, 0x174e752c),
    Poly::new(0xd492a70c, 0x1eccc469),
    Poly::new(0x43eddec2, 0x19b2ab55),
    Poly::new(0xa791b3a8, 0x0dc9a6e2),
    Poly::new(0x30eeca66, 0x0ab7c9de),
    Poly::new(0x896f4034, 0x0335789b),
    Poly::new(0x1e1039fa, 0x044b17a7),
    Poly::new(0x4c4b1b8b, 0x18b1aaf4),
    Poly::new(0xdb346245, 0x1fcfc5c8),
    Poly::new(0x62b5e817, 0x164d748d),
    Poly::new(0xf5ca91d9, 0x11331bb1),
    Poly::new(0x11b6fcb3, 0x05481606),
    Poly::new(0x86c9857d, 0x0236793a),
    Poly::new(0x3f480f2f, 0x0bb4c87f),
    Poly::new(0xa83776e1, 0x0ccaa743),
    Poly::new(0xe43c8cc4, 0x01ddad6e),
    Poly::new(0x7343f50a, 0x06a3c252),
    Poly::new(0xcac27f58, 0x0f217317),
    Poly::new(0x5dbd0696, 0x085f1c2b),
    Poly::new(0xb9c16bfc, 0x1c24119c),
    Poly::new(0x2ebe1232, 0x1b5a7ea0),
    Poly::new(0x973f9860, 0x12d8cfe5),
    Poly::new(0x0040e1ae, 0x15a6a0d9),
    Poly::new(0x521bc3df, 0x095c1d8a),
    Poly::new(0xc564ba11, 0x0e2272b6),
    Poly::new(0x7ce53043, 0x07a0c3f3),
    Poly::new(0xeb9a498d, 0x00deaccf),
    Poly::new(0x0fe624e7, 0x14a5a178),
    Poly::new(0x98995d29, 0x13dbce44),
    Poly::new(0x2118d77b, 0x1a597f01),
    Poly::new(0xb667aeb5, 0x1d27103d),
    Poly::new(0x887212f2, 0x10decca7),
    Poly::new(0x1f0d6b3c, 0x17a0a39b),
    Poly::new(0xa68ce16e, 0x1e2212de),
    Poly::new(0x31f398a0, 0x195c7de2),
    Poly::new(0xd58ff5ca, 0x0d277055),
    Poly::new(0x42f08c04, 0x0a591f69),
    Poly::new(0xfb710656, 0x03dbae2c),
    Poly::new(0x6c0e7f98, 0x04a5c110),
    Poly::new(0x3e555de9, 0x185f7c43),
    Poly::new(0xa92a2427, 0x1f21137f),
    Poly::new(0x10abae75, 0x16a3a23a),
    Poly::new(0x87d4d7bb, 0x11ddcd06),
    Poly::new(0x63a8bad1, 0x05a6c0b1),
    Poly::new(0xf4d7c31f, 0x02d8af8d),
    Poly::new(0x4d56494d, 0x0b5a1ec8),
    Poly::new(0xda293083, 0x0c2471f4),
    Poly::new(0x317d31c3, 0x10a9a7fc),
    Poly::new(0xa602480d, 0x17d7c8c0),
    Poly::new(0x1f83c25f, 0x1e557985),
    Poly::new(0x88fcbb91, 0x192b16b9),
    Poly::new(0x6c80d6fb, 0x0d501b0e),
    Poly::new(0xfbffaf35, 0x0a2e7432),
    Poly::new(0x427e2567, 0x03acc577),
    Poly::new(0xd5015ca9, 0x04d2aa4b),
    Poly::new(0x875a7ed8, 0x18281718),
    Poly::new(0x10250716, 0x1f567824),
    Poly::new(0xa9a48d44, 0x16d4c961),
    Poly::new(0x3edbf48a, 0x11aaa65d),
    Poly::new(0xdaa799e0, 0x05d1abea),
    Poly::new(0x4dd8e02e, 0x02afc4d6),
    Poly::new(0xf4596a7c, 0x0b2d7593),
    Poly::new(0x632613b2, 0x0c531aaf),
    Poly::new(0x5d33aff5, 0x01aac635),
    Poly::new(0xca4cd63b, 0x06d4a909),
    Poly::new(0x73cd5c69, 0x0f56184c),
    Poly::new(0xe4b225a7, 0x08287770),
    Poly::new(0x00ce48cd, 0x1c537ac7),
    Poly::new(0x97b13103, 0x1b2d15fb),
    Poly::new(0x2e30bb51, 0x12afa4be),
    Poly::new(0xb94fc29f, 0x15d1cb82),
    Poly::new(0xeb14e0ee, 0x092b76d1),
    Poly::new(0x7c6b9920, 0x0e5519ed),
    Poly::new(0xc5ea1372, 0x07d7a8a8),
    Poly::new(0x52956abc, 0x00a9c794),
    Poly::new(0xb6e907d6, 0x14d2ca23),
    Poly::new(0x21967e18, 0x13aca51f),
    Poly::new(0x9817f44a, 0x1a2e145a),
    Poly::new(0x0f688d84, 0x1d507b66),
];

pub(crate) const POLY88: [Poly; 256] = [
    Poly::new(0x00000000, 0x00000000),
    Poly::new(0x397b429f, 0x149fdb75),
    Poly::new(0x7f2a0455, 0x1a4d7fea),
    Poly::new(0x465146ca, 0x0ed2a49f),
    Poly::new(0xf38889c1, 0x07e836d4),
    Poly::new(0xcaf3cb5e, 0x1377eda1),
    Poly::new(0x8ca28d94, 0x1da5493e),
    Poly::new(0xb5d9cf0b, 0x093a924b),
    Poly::new(0xe7111382, 0x0fd06da9),
    Poly::new(0xde6a511d, 0x1b4fb6dc),
    Poly::new(0x983b17d7, 0x159d1243),
    Poly::new(0xa1405548, 0x0102c936),
    Poly::new(0x14999a43, 0x08385b7d),
    Poly::new(0x2de2d8dc, 0x1ca78008),
    Poly::new(0x6bb39e16, 0x12752497),
    Poly::new(0x52c8dc89, 0x06eaffe2),
    Poly::new(0xce222704, 0x1fa0db53),
    Poly::new(0xf759659b, 0x0b3f0026),
    Poly::new(0xb1082351, 0x05eda4b9),
    Poly::new(0x887361ce, 0x11727fcc),
    Poly::new(0x3daaaec5, 0x1848ed87),
    Poly::new(0x04d1ec5a, 0x0cd736f2),
    Poly::new(0x4280aa90, 0x0205926d),
    Poly::new(0x7bfbe80f, 0x169a4918),
    Poly::new(0x29333486, 0x1070b6fa),
    Poly::new(0x10487619, 0x04ef6d8f),
    Poly::new(0x561930d3, 0x0a3dc910),
    Poly::new(0x6f62724c, 0x1ea21265),
    Poly::new(0xdabbbd47, 0x1798802e),
    Poly::new(0xe3c0ffd8, 0x03075b5b),
    Poly::new(0xa591b912, 0x0dd5ffc4),
    Poly::new(0x9ceafb8d, 0x194a24b1),
    Poly::new(0x9198cf63, 0x0c337fa7),
    Poly::new(0xa8e38dfc, 0x18aca4d2),
    Poly::new(0xeeb2cb36, 0x167e004d),
    Poly::new(0xd7c989a9, 0x02e1db38),
    Poly::new(0x621046a2, 0x0bdb4973),
    Poly::new(0x5b6b043d, 0x1f449206),
    Poly::new(0x1d3a42f7, 0x11963699),
    Poly::new(0x24410068, 0x0509edec),
    Poly::new(0x7689dce1, 0x03e3120e),
    Poly::new(0x4ff29e7e, 0x177cc97b),
    Poly::new(0x09a3d8b4, 0x19ae6de4),
    Poly::new(0x30d89a2b, 0x0d31b691),
    Poly::new(0x85015520, 0x040b24da),
    Poly::new(0xbc7a17bf, 0x1094ffaf),
    Poly::new(0xfa2b5175, 0x1e465b30),
    Poly::new(0xc35013ea, 0x0ad98045),
    Poly::new(0x5fbae867, 0x1393a4f4),
    Poly::new(0x66c1aaf8, 0x070c7f81),
    Poly::new(0x2090ec32, 0x09dedb1e),
    Poly::new(0x19ebaead, 0x1d41006b),
    Poly::new(0xac3261a6, 0x147b9220),
    Poly::new(0x95492339, 0x00e44955),
    Poly::new(0xd31865f3, 0x0e36edca),
    Poly::new(0xea63276c, 0x1aa936bf),
    Poly::new(0xb8abfbe5, 0x1c43c95d),
    Poly::new(0x81d0b97a, 0x08dc1228),
    Poly::new(0xc781ffb0, 0x060eb6b7),
    Poly::new(0xfefabd2f, 0x12916dc2),
    Poly::new(0x4b237224, 0x1babff89),
    Poly::new(0x725830bb, 0x0f3424fc),
    Poly::new(0x34097671, 0x01e68063),
    Poly::new(0x0d7234ee, 0x15795b16),
    Poly::new(0x23319ec6, 0x1866ff4f),
    Poly::new(0x1a4adc59, 0x0cf9243a),
    Poly::new(0x5c1b9a93, 0x022b80a5),
    Poly::new(0x6560d80c, 0x16b45bd0),
    Poly::new(0xd0b91707, 0x1f8ec99b),
    Poly::new(0xe9c25598, 0x0b1112ee),
    Poly::new(0xaf931352, 0x05c3b671),
    Poly::new(0x96e851cd, 0x115c6d04),
    Poly::new(0xc4208d44, 0x17b692e6),
    Poly::new(0xfd5bcfdb, 0x03294993),
    Poly::new(0xbb0a8911, 0x0dfbed0c),
    Poly::new(0x8271cb8e, 0x19643679),
    Poly::new(0x37a80485, 0x105ea432),
    Poly::new(0x0ed3461a, 0x04c17f47),
    Poly::new(0x488200d0, 0x0a13dbd8),
    Poly::new(0x71f9424f, 0x1e8c00ad),
    Poly::new(0xed13b9c2, 0x07c6241c),
    Poly::new(0xd468fb5d, 0x1359ff69),
    Poly::new(0x9239bd97, 0x1d8b5bf6),
    Poly::new(0xab42ff08, 0x09148083),
    Poly::new(0x1e9b3003, 0x002e12c8),
    Poly::new(0x27e0729c, 0x14b1c9bd),
    Poly::new(0x61b13456, 0x1a636d22),
    Poly::new(0x58ca76c9, 0x0efcb657),
    Poly::new(0x0a02aa40, 0x081649b5),
    Poly::new(0x3379e8df, 0x1c8992c0),
    Poly::new(0x7528ae15, 0x125b365f),
    Poly::new(0x4c53ec8a, 0x06c4ed2a),
    Poly::new(0xf98a2381, 0x0ffe7f61),
    Poly::new(0xc0f1611e, 0x1b61a414),
    Poly::new(0x86a027d4, 0x15b3008b),
    Poly::new(0xbfdb654b, 0x012cdbfe),
    Poly::new(0xb2a951a5, 0x145580e8),
    Poly::new(0x8bd2133a, 0x00ca5b9d),
    Poly::new(0xcd8355f0, 0x0e18ff02),
    Poly::new(0xf4f8176f, 0x1a872477),
    Poly::new(0x4121d864, 0x13bdb63c),
    Poly::new(0x785a9afb, 0x07226d49),
    Poly::new(0x3e0bdc31, 0x09f0c9d6),
    Poly::new(0x07709eae, 0x1d6f12a3),
    Poly::new(0x55b84227, 0x1b85ed41),
    Poly::new(0x6cc300b8, 0x0f1a3634),
    Poly::new(0x2a924672, 0x01c892ab),
    Poly::new(0x13e904ed, 0x155749de),
    Poly::new(0xa630cbe6, 0x1c6ddb95),
    Poly::new(0x9f4b8979, 0x08f200e0),
    Poly::new(0xd91acfb3, 0x0620a47f),
    Poly::new(0xe0618d2c, 0x12bf7f0a),
    Poly::new(0x7c8b76a1, 0x0bf55bbb),
    Poly::new(0x45f0343e, 0x1f6a80ce),
    Poly::new(0x03a172f4, 0x11b82451),
    Poly::new(0x3ada306b, 0x0527ff24),
    Poly::new(0x8f03ff60, 0x0c1d6d6f),
    Poly::new(0xb678bdff, 0x1882b61a),
    Poly::new(0xf029fb35, 0x16501285),
    Poly::new(0xc952b9aa, 0x02cfc9f0),
    Poly::new(0x9b9a6523, 0x04253612),
    Poly::new(0xa2e127bc, 0x10baed67),
    Poly::new(0xe4b06176, 0x1e6849f8),
    Poly::new(0xddcb23e9, 0x0af7928d),
    Poly::new(0x6812ece2, 0x03cd00c6),
    Poly::new(0x5169ae7d, 0x1752dbb3),
    Poly::new(0x1738e8b7, 0x19807f2c),
    Poly::new(0x2e43aa28, 0x0d1fa459),
    Poly::new(0x4bbfbce7, 0x03bf379e),
    Poly::new(0x72c4fe78, 0x1720eceb),
    Poly::new(0x3495b8b2, 0x19f24874),
    Poly::new(0x0deefa2d, 0x0d6d9301),
    Poly::new(0xb8373526, 0x0457014a),
    Poly::new(0x814c77b9, 0x10c8da3f),
    Poly::new(0xc71d3173, 0x1e1a7ea0),
    Poly::new(0xfe6673ec, 0x0a85a5d5),
    Poly::new(0xacaeaf65, 0x0c6f5a37),
    Poly::new(0x95d5edfa, 0x18f08142),
    Poly::new(0xd384ab30, 0x162225dd),
    Poly::new(0xeaffe9af, 0x02bdfea8),
    Poly::new(0x5f2626a4, 0x0b876ce3),
    Poly::new(0x665d643b, 0x1f18b796),
    Poly::new(0x200c22f1, 0x11ca1309),
    Poly::new(0x1977606e, 0x0555c87c),
    Poly::new(0x859d9be3, 0x1c1feccd),
    Poly::new(0xbce6d97c, 0x088037b8),
    Poly::new(0xfab79fb6, 0x06529327),
    Poly::new(0xc3ccdd29, 0x12cd4852),
    Poly::new(0x76151222, 0x1bf7da19),
    Poly::new(0x4f6e50bd, 0x0f68016c),
    Poly::new(0x093f1677, 0x01baa5f3),
    Poly::new(0x304454e8, 0x15257e86),
    Poly::new(0x628c8861, 0x13cf8164),
    Poly::new(0x5bf7cafe, 0x07505a11),
    Poly::new(0x1da68c34, 0x0982fe8e),
    Poly::new(0x24ddceab, 0x1d1d25fb),
    Poly::new(0x910401a0, 0x1427b7b0),
    Poly::new(0xa87f433f, 0x00b86cc5),
    Poly::new(0xee2e05f5, 0x0e6ac85a),
    Poly::new(0xd755476a, 0x1af5132f),
    Poly::new(0xda277384, 0x0f8c4839),
    Poly::new(0xe35c311b, 0x1b13934c),
    Poly::new(0xa50d77d1, 0x15c137d3),
    Poly::new(0x9c76354e, 0x015eeca6),
    Poly::new(0x29affa45, 0x08647eed),
    Poly::new(0x10d4b8da, 0x1cfba598),
    Poly::new(0x5685fe10, 0x12290107),
    Poly::new(0x6ffebc8f, 0x06b6da72),
    Poly::new(0x3d366006, 0x005c2590),
    Poly::new(0x044d2299, 0x14c3fee5),
    Poly::new(0x421c6453, 0x1a115a7a),
    Poly::new(0x7b6726cc, 0x0e8e810f),
    Poly::new(0xcebee9c7, 0x07b41344),
    Poly::new(0xf7c5ab58, 0x132bc831),
    Poly::new(0xb194ed92, 0x1df96cae),
    Poly::new(0x88efaf0d, 0x0966b7db),
    Poly::new(0x14055480, 0x102c936a),
    Poly::new(0x2d7e161f, 0x04b3481f),
    Poly::new(0x6b2f50d5, 0x0a61ec80),
    Poly::new(0x5254124a, 0x1efe37f5),
    Poly::new(0xe78ddd41, 0x17c4a5be),
    Poly::new(0xdef69fde, 0x035b7ecb),
    Poly::new(0x98a7d914, 0x0d89da54),
    Poly::new(0xa1dc9b8b, 0x19160121),
    Poly::new(0xf3144702, 0x1ffcfec3),
    Poly::new(0xca6f059d, 0x0b6325b6),
    Poly::new(0x8c3e4357, 0x05b18129),
    Poly::new(0xb54501c8, 0x112e5a5c),
    Poly::new(0x009ccec3, 0x1814c817),
    Poly::new(0x39e78c5c, 0x0c8b1362),
    Poly::new(0x7fb6ca96, 0x0259b7fd),
    Poly::new(0x46cd8809, 0x16c66c88),
    Poly::new(0x688e2221, 0x1bd9c8d1),
    Poly::new(0x51f560be, 0x0f4613a4),
    Poly::new(0x17a42674, 0x0194b73b),
    Poly::new(0x2edf64eb, 0x150b6c4e),
    Poly::new(0x9b06abe0, 0x1c31fe05),
    Poly::new(0xa27de97f, 0x08ae2570),
    Poly::new(0xe42cafb5, 0x067c81ef),
    Poly::new(0xdd57ed2a, 0x12e35a9a),
    Poly::new(0x8f9f31a3, 0x1409a578),
    Poly::new(0xb6e4733c, 0x00967e0d),
    Poly::new(0xf0b535f6, 0x0e44da92),
    Poly::new(0xc9ce7769, 0x1adb01e7),
    Poly::new(0x7c17b862, 0x13e193ac),
    Poly::new(0x456cfafd, 0x077e48d9),
    Poly::new(0x033dbc37, 0x09acec46),
    Poly::new(0x3a46fea8, 0x1d333733),
    Poly::new(0xa6ac0525, 0x04791382),
    Poly::new(0x9fd747ba, 0x10e6c8f7),
    Poly::new(0xd9860170, 0x1e346c68),
    Poly::new(0xe0fd43ef, 0x0aabb71d),
    Poly::new(0x55248ce4, 0x03912556),
    Poly::new(0x6c5fce7b, 0x170efe23),
    Poly::new(0x2a0e88b1, 0x19dc5abc),
    Poly::new(0x1375ca2e, 0x0d4381c9),
    Poly::new(0x41bd16a7, 0x0ba97e2b),
    Poly::new(0x78c65438, 0x1f36a55e),
    Poly::new(0x3e9712f2, 0x11e401c1),
    Poly::new(0x07ec506d, 0x057bdab4),
    Poly::new(0xb2359f66, 0x0c4148ff),
    Poly::new(0x8b4eddf9, 0x18de938a),
    Poly::new(0xcd1f9b33, 0x160c3715),
    Poly::new(0xf464d9ac, 0x0293ec60),
    Poly::new(0xf916ed42, 0x17eab776),
    Poly::new(0xc06dafdd, 0x03756c03),
    Poly::new(0x863ce917, 0x0da7c89c),
    Poly::new(0xbf47ab88, 0x193813e9),
    Poly::new(0x0a9e6483, 0x100281a2),
    Poly::new(0x33e5261c, 0x049d5ad7),
    Poly::new(0x75b460d6, 0x0a4ffe48),
    Poly::new(0x4ccf2249, 0x1ed0253d),
    Poly::new(0x1e07fec0, 0x183adadf),
    Poly::new(0x277cbc5f, 0x0ca501aa),
    Poly::new(0x612dfa95, 0x0277a535),
    Poly::new(0x5856b80a, 0x16e87e40),
    Poly::new(0xed8f7701, 0x1fd2ec0b),
    Poly::new(0xd4f4359e, 0x0b4d377e),
    Poly::new(0x92a57354, 0x059f93e1),
    Poly::new(0xabde31cb, 0x11004894),
    Poly::new(0x3734ca46, 0x084a6c25),
    Poly::new(0x0e4f88d9, 0x1cd5b750),
    Poly::new(0x481ece13, 0x120713cf),
    Poly::new(0x71658c8c, 0x0698c8ba),
    Poly::new(0xc4bc4387, 0x0fa25af1),
    Poly::new(0xfdc70118, 0x1b3d8184),
    Poly::new(0xbb9647d2, 0x15ef251b),
    Poly::new(0x82ed054d, 0x0170fe6e),
    Poly::new(0xd025d9c4, 0x079a018c),
    Poly::new(0xe95e9b5b, 0x1305daf9),
    Poly::new(0xaf0fdd91, 0x1dd77e66),
    Poly::new(0x96749f0e, 0x0948a513),
    Poly::new(0x23ad5005, 0x00723758),
    Poly::new(0x1ad6129a, 0x14edec2d),
    Poly::new(0x5c875450, 0x1a3f48b2),
    Poly::new(0x65fc16cf, 0x0ea093c7),
];

/// Byte substitution applied to every output byte of a combine.
pub(crate) const PERM: [u8; 256] = [
    55, 254, 252, 251, 250, 248, 240, 245, 246, 238, 237, 244, 7, 189, 214, 236,
    235, 20, 33, 8, 227, 14, 233, 178, 172, 60, 229, 133, 152, 19, 210, 203,
    221, 208, 76, 18, 13, 199, 113, 62, 40, 190, 213, 194, 43, 181, 21, 15,
    201, 162, 90, 186, 71, 117, 107, 70, 191, 5, 173, 44, 39, 12, 174, 183,
    99, 11, 176, 163, 161, 72, 86, 105, 2, 83, 42, 52, 179, 135, 103, 110,
    151, 58, 108, 96, 166, 25, 115, 66, 142, 10, 141, 48, 104, 34, 159, 120,
    22, 140, 64, 82, 78, 68, 207, 125, 123, 150, 144, 138, 128, 139, 136, 114,
    119, 53, 148, 185, 41, 124, 216, 143, 49, 92, 98, 51, 112, 73, 50, 63,
    16, 46, 158, 126, 206, 122, 94, 132, 88, 184, 28, 84, 127, 156, 167, 223,
    118, 89, 116, 17, 111, 121, 109, 77, 146, 61, 224, 101, 81, 218, 97, 188,
    243, 155, 57, 102, 54, 129, 93, 192, 153, 106, 36, 145, 79, 31, 137, 26,
    67, 85, 175, 80, 168, 65, 91, 1, 147, 149, 6, 29, 37, 69, 182, 165,
    4, 74, 55, 47, 171, 169, 75, 134, 193, 195, 198, 131, 38, 180, 56, 196,
    23, 154, 177, 200, 205, 27, 209, 95, 204, 160, 3, 30, 157, 32, 9, 212,
    211, 45, 202, 170, 0, 219, 187, 87, 35, 100, 217, 232, 164, 228, 220, 197,
    231, 215, 226, 130, 225, 234, 241, 239, 59, 230, 247, 24, 249, 242, 222, 253,
];
