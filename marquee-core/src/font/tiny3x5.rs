//! Proportional 3x5 font for 8x8 panels.
//!
//! Capitals and digits fit a 3x5 cell, one column of spacing after each glyph.

use super::{Font, Glyph};

static BITMAP: [u8; 146] = [
    0xED, 0xB7, 0xDF, 0x5E, 0x4F, 0x52, 0xA5, 0x55, 0x57, 0xB5, 0x32, 0xB5,
    0x55, 0x74, 0xDE, 0x4A, 0x93, 0xDB, 0x7A, 0xC9, 0x7C, 0x54, 0xF8, 0xA3,
    0xAD, 0xE4, 0xF9, 0x8E, 0x73, 0xDF, 0xCA, 0x4B, 0xDF, 0x7F, 0xBC, 0xEA,
    0x8C, 0x54, 0x47, 0x8F, 0x11, 0x53, 0x14, 0x12, 0xBE, 0x35, 0x7D, 0xBA,
    0xEB, 0x9C, 0x91, 0xEB, 0x6E, 0xF3, 0x4F, 0xE6, 0x91, 0xCB, 0x5D, 0xBE,
    0xDE, 0x92, 0xE4, 0x9A, 0xAD, 0xD6, 0xC9, 0x27, 0xBF, 0xDB, 0x7F, 0xF5,
    0x5B, 0x56, 0xBA, 0x45, 0x6F, 0x7A, 0xEB, 0x5C, 0x47, 0x74, 0x92, 0xB6,
    0xD7, 0x6D, 0x4A, 0xDF, 0xED, 0xAA, 0xDB, 0x52, 0x5C, 0xA9, 0xFA, 0xB9,
    0x11, 0x3A, 0xBA, 0xBE, 0x5D, 0xAE, 0x6B, 0x73, 0x91, 0x97, 0x6B, 0x5E,
    0x37, 0x3C, 0x8E, 0xB3, 0xA6, 0xB6, 0xDD, 0x16, 0x97, 0x6B, 0xFB, 0xED,
    0xD6, 0xD5, 0x6A, 0xD7, 0x47, 0x59, 0x72, 0x46, 0x8E, 0x5D, 0x27, 0x6D,
    0x76, 0xA5, 0x7F, 0xB5, 0x2B, 0x6B, 0x3B, 0xA9, 0xDA, 0x89, 0xFF, 0x22,
    0xB3, 0xC0,
];

static GLYPHS: [Glyph; 95] = [
    Glyph::new(b' ', 0, 0, 0, 0, 2, 0),
    Glyph::new(b'!', 1, 5, 0, -4, 2, 0),
    Glyph::new(b'"', 3, 2, 0, -4, 4, 5),
    Glyph::new(b'#', 3, 5, 0, -4, 4, 11),
    Glyph::new(b'$', 3, 5, 0, -4, 4, 26),
    Glyph::new(b'%', 3, 5, 0, -4, 4, 41),
    Glyph::new(b'&', 3, 5, 0, -4, 4, 56),
    Glyph::new(b'\'', 1, 2, 0, -4, 2, 71),
    Glyph::new(b'(', 2, 5, 0, -4, 3, 73),
    Glyph::new(b')', 2, 5, 0, -4, 3, 83),
    Glyph::new(b'*', 3, 3, 0, -4, 4, 93),
    Glyph::new(b'+', 3, 3, 0, -3, 4, 102),
    Glyph::new(b',', 2, 2, 0, -1, 3, 111),
    Glyph::new(b'-', 3, 1, 0, -2, 4, 115),
    Glyph::new(b'.', 1, 1, 0, 0, 2, 118),
    Glyph::new(b'/', 3, 5, 0, -4, 4, 119),
    Glyph::new(b'0', 3, 5, 0, -4, 4, 134),
    Glyph::new(b'1', 3, 5, 0, -4, 4, 149),
    Glyph::new(b'2', 3, 5, 0, -4, 4, 164),
    Glyph::new(b'3', 3, 5, 0, -4, 4, 179),
    Glyph::new(b'4', 3, 5, 0, -4, 4, 194),
    Glyph::new(b'5', 3, 5, 0, -4, 4, 209),
    Glyph::new(b'6', 3, 5, 0, -4, 4, 224),
    Glyph::new(b'7', 3, 5, 0, -4, 4, 239),
    Glyph::new(b'8', 3, 5, 0, -4, 4, 254),
    Glyph::new(b'9', 3, 5, 0, -4, 4, 269),
    Glyph::new(b':', 1, 3, 0, -3, 2, 284),
    Glyph::new(b';', 2, 4, 0, -3, 3, 287),
    Glyph::new(b'<', 3, 5, 0, -4, 4, 295),
    Glyph::new(b'=', 3, 3, 0, -3, 4, 310),
    Glyph::new(b'>', 3, 5, 0, -4, 4, 319),
    Glyph::new(b'?', 3, 5, 0, -4, 4, 334),
    Glyph::new(b'@', 3, 5, 0, -4, 4, 349),
    Glyph::new(b'A', 3, 5, 0, -4, 4, 364),
    Glyph::new(b'B', 3, 5, 0, -4, 4, 379),
    Glyph::new(b'C', 3, 5, 0, -4, 4, 394),
    Glyph::new(b'D', 3, 5, 0, -4, 4, 409),
    Glyph::new(b'E', 3, 5, 0, -4, 4, 424),
    Glyph::new(b'F', 3, 5, 0, -4, 4, 439),
    Glyph::new(b'G', 3, 5, 0, -4, 4, 454),
    Glyph::new(b'H', 3, 5, 0, -4, 4, 469),
    Glyph::new(b'I', 3, 5, 0, -4, 4, 484),
    Glyph::new(b'J', 3, 5, 0, -4, 4, 499),
    Glyph::new(b'K', 3, 5, 0, -4, 4, 514),
    Glyph::new(b'L', 3, 5, 0, -4, 4, 529),
    Glyph::new(b'M', 3, 5, 0, -4, 4, 544),
    Glyph::new(b'N', 3, 5, 0, -4, 4, 559),
    Glyph::new(b'O', 3, 5, 0, -4, 4, 574),
    Glyph::new(b'P', 3, 5, 0, -4, 4, 589),
    Glyph::new(b'Q', 3, 5, 0, -4, 4, 604),
    Glyph::new(b'R', 3, 5, 0, -4, 4, 619),
    Glyph::new(b'S', 3, 5, 0, -4, 4, 634),
    Glyph::new(b'T', 3, 5, 0, -4, 4, 649),
    Glyph::new(b'U', 3, 5, 0, -4, 4, 664),
    Glyph::new(b'V', 3, 5, 0, -4, 4, 679),
    Glyph::new(b'W', 3, 5, 0, -4, 4, 694),
    Glyph::new(b'X', 3, 5, 0, -4, 4, 709),
    Glyph::new(b'Y', 3, 5, 0, -4, 4, 724),
    Glyph::new(b'Z', 3, 5, 0, -4, 4, 739),
    Glyph::new(b'[', 2, 5, 0, -4, 3, 754),
    Glyph::new(b'\\', 3, 5, 0, -4, 4, 764),
    Glyph::new(b']', 2, 5, 0, -4, 3, 779),
    Glyph::new(b'^', 3, 2, 0, -4, 4, 789),
    Glyph::new(b'_', 3, 1, 0, 0, 4, 795),
    Glyph::new(b'`', 2, 2, 0, -4, 3, 798),
    Glyph::new(b'a', 3, 4, 0, -3, 4, 802),
    Glyph::new(b'b', 3, 5, 0, -4, 4, 814),
    Glyph::new(b'c', 3, 4, 0, -3, 4, 829),
    Glyph::new(b'd', 3, 5, 0, -4, 4, 841),
    Glyph::new(b'e', 3, 4, 0, -3, 4, 856),
    Glyph::new(b'f', 3, 5, 0, -4, 4, 868),
    Glyph::new(b'g', 3, 5, 0, -4, 4, 883),
    Glyph::new(b'h', 3, 5, 0, -4, 4, 898),
    Glyph::new(b'i', 1, 5, 0, -4, 2, 913),
    Glyph::new(b'j', 2, 5, 0, -4, 3, 918),
    Glyph::new(b'k', 3, 5, 0, -4, 4, 928),
    Glyph::new(b'l', 1, 5, 0, -4, 2, 943),
    Glyph::new(b'm', 3, 4, 0, -3, 4, 948),
    Glyph::new(b'n', 3, 4, 0, -3, 4, 960),
    Glyph::new(b'o', 3, 4, 0, -3, 4, 972),
    Glyph::new(b'p', 3, 4, 0, -3, 4, 984),
    Glyph::new(b'q', 3, 4, 0, -3, 4, 996),
    Glyph::new(b'r', 3, 4, 0, -3, 4, 1008),
    Glyph::new(b's', 3, 4, 0, -3, 4, 1020),
    Glyph::new(b't', 3, 5, 0, -4, 4, 1032),
    Glyph::new(b'u', 3, 4, 0, -3, 4, 1047),
    Glyph::new(b'v', 3, 4, 0, -3, 4, 1059),
    Glyph::new(b'w', 3, 4, 0, -3, 4, 1071),
    Glyph::new(b'x', 3, 4, 0, -3, 4, 1083),
    Glyph::new(b'y', 3, 5, 0, -4, 4, 1095),
    Glyph::new(b'z', 3, 4, 0, -3, 4, 1110),
    Glyph::new(b'{', 3, 5, 0, -4, 4, 1122),
    Glyph::new(b'|', 1, 5, 0, -4, 2, 1137),
    Glyph::new(b'}', 3, 5, 0, -4, 4, 1142),
    Glyph::new(b'~', 3, 2, 0, -3, 4, 1157),
];

pub static TINY_3X5: Font = Font::new(0x20, 0x7E, &GLYPHS, &BITMAP, 6);
