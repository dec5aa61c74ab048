//! 5x7 fixed-pitch font for 16x16 panels.
//!
//! Every glyph advances 6 columns; bitmaps are cropped to their lit bounds.

use super::{Font, Glyph};

static BITMAP: [u8; 310] = [
    0xF6, 0xD5, 0x7D, 0x5F, 0x51, 0x1D, 0x47, 0x15, 0xC4, 0xCE, 0x88, 0xB9,
    0xB2, 0x4C, 0x94, 0xDB, 0xB5, 0x4C, 0xAB, 0x55, 0xD5, 0x21, 0x3E, 0x42,
    0x2D, 0xF8, 0x44, 0x44, 0x41, 0xD1, 0x9D, 0x73, 0x17, 0x2C, 0x92, 0x5D,
    0xD1, 0x08, 0x88, 0x8F, 0xFC, 0x44, 0x10, 0x62, 0xE1, 0x19, 0x52, 0xF8,
    0x85, 0xF8, 0x78, 0x21, 0x8B, 0x8C, 0x88, 0x7A, 0x31, 0x77, 0xC2, 0x22,
    0x21, 0x08, 0x74, 0x62, 0xE8, 0xC5, 0xCE, 0x8C, 0x5E, 0x11, 0x32, 0x50,
    0x58, 0x49, 0x21, 0x08, 0x7E, 0x0F, 0xC2, 0x10, 0x92, 0x43, 0xA2, 0x11,
    0x10, 0x04, 0x74, 0x6F, 0x5B, 0xC1, 0xCE, 0x8C, 0x7F, 0x18, 0xC7, 0xD1,
    0x8F, 0xA3, 0x1F, 0x3A, 0x30, 0x84, 0x22, 0xEF, 0x46, 0x31, 0x8C, 0x7D,
    0xF8, 0x43, 0xD0, 0x87, 0xFF, 0x08, 0x7A, 0x10, 0x83, 0xA3, 0x0B, 0xC6,
    0x2F, 0x8C, 0x63, 0xF8, 0xC6, 0x3D, 0x24, 0x97, 0x38, 0x84, 0x21, 0x49,
    0x91, 0x95, 0x31, 0x49, 0x46, 0x10, 0x84, 0x21, 0x0F, 0xC7, 0x75, 0x8C,
    0x63, 0x18, 0xE6, 0xB3, 0x8C, 0x62, 0xE8, 0xC6, 0x31, 0x8B, 0xBD, 0x18,
    0xFA, 0x10, 0x83, 0xA3, 0x18, 0xD6, 0x4D, 0xF4, 0x63, 0xEA, 0x4A, 0x2F,
    0x84, 0x1C, 0x10, 0xFB, 0xE4, 0x21, 0x08, 0x42, 0x46, 0x31, 0x8C, 0x62,
    0xE8, 0xC6, 0x31, 0x8A, 0x89, 0x18, 0xC6, 0xB5, 0xDC, 0x63, 0x15, 0x11,
    0x51, 0x8C, 0x62, 0xA2, 0x10, 0x84, 0xF8, 0x44, 0x44, 0x43, 0xFE, 0x49,
    0x27, 0x82, 0x08, 0x20, 0xF2, 0x49, 0x3C, 0x8A, 0x8F, 0xE5, 0xC1, 0x7C,
    0x5F, 0x08, 0x5B, 0x31, 0x8F, 0x9D, 0x08, 0x45, 0xC1, 0x0B, 0x67, 0x18,
    0xBD, 0xD1, 0xFC, 0x1C, 0x64, 0xA3, 0x88, 0x42, 0x1F, 0x18, 0xBC, 0x2E,
    0x84, 0x2D, 0x98, 0xC6, 0x28, 0x64, 0x97, 0x10, 0x31, 0x19, 0x68, 0x89,
    0xAC, 0xA9, 0xC9, 0x24, 0xBE, 0xAB, 0x58, 0xC6, 0xD9, 0x8C, 0x62, 0xE8,
    0xC6, 0x2E, 0xF4, 0x7D, 0x08, 0x36, 0x6F, 0x08, 0x6D, 0x98, 0x42, 0x0E,
    0x83, 0x83, 0xE4, 0x23, 0x88, 0x42, 0x4D, 0x18, 0xC6, 0x6D, 0x8C, 0x62,
    0xA2, 0x46, 0x35, 0xAA, 0xA2, 0xA2, 0x2A, 0x31, 0x8B, 0xC2, 0xEF, 0x88,
    0x88, 0xF9, 0x4A, 0x24, 0x7F, 0xC4, 0x8A, 0x51, 0x15, 0x10,
];

static GLYPHS: [Glyph; 95] = [
    Glyph::new(b' ', 0, 0, 0, 0, 6, 0),
    Glyph::new(b'!', 1, 6, 2, -6, 6, 0),
    Glyph::new(b'"', 3, 2, 1, -6, 6, 6),
    Glyph::new(b'#', 5, 5, 0, -6, 6, 12),
    Glyph::new(b'$', 5, 7, 0, -6, 6, 37),
    Glyph::new(b'%', 5, 5, 0, -6, 6, 72),
    Glyph::new(b'&', 5, 6, 0, -6, 6, 97),
    Glyph::new(b'\'', 1, 2, 2, -6, 6, 127),
    Glyph::new(b'(', 2, 6, 1, -6, 6, 129),
    Glyph::new(b')', 2, 6, 2, -6, 6, 141),
    Glyph::new(b'*', 5, 3, 0, -5, 6, 153),
    Glyph::new(b'+', 5, 5, 0, -5, 6, 168),
    Glyph::new(b',', 2, 3, 1, -2, 6, 193),
    Glyph::new(b'-', 5, 1, 0, -3, 6, 199),
    Glyph::new(b'.', 1, 1, 2, -1, 6, 204),
    Glyph::new(b'/', 5, 5, 0, -6, 6, 205),
    Glyph::new(b'0', 5, 7, 0, -6, 6, 230),
    Glyph::new(b'1', 3, 7, 1, -6, 6, 265),
    Glyph::new(b'2', 5, 7, 0, -6, 6, 286),
    Glyph::new(b'3', 5, 7, 0, -6, 6, 321),
    Glyph::new(b'4', 5, 7, 0, -6, 6, 356),
    Glyph::new(b'5', 5, 7, 0, -6, 6, 391),
    Glyph::new(b'6', 5, 7, 0, -6, 6, 426),
    Glyph::new(b'7', 5, 7, 0, -6, 6, 461),
    Glyph::new(b'8', 5, 7, 0, -6, 6, 496),
    Glyph::new(b'9', 5, 7, 0, -6, 6, 531),
    Glyph::new(b':', 1, 4, 2, -5, 6, 566),
    Glyph::new(b';', 2, 6, 1, -5, 6, 570),
    Glyph::new(b'<', 4, 7, 0, -6, 6, 582),
    Glyph::new(b'=', 5, 3, 0, -4, 6, 610),
    Glyph::new(b'>', 4, 7, 1, -6, 6, 625),
    Glyph::new(b'?', 5, 7, 0, -6, 6, 653),
    Glyph::new(b'@', 5, 7, 0, -6, 6, 688),
    Glyph::new(b'A', 5, 7, 0, -6, 6, 723),
    Glyph::new(b'B', 5, 7, 0, -6, 6, 758),
    Glyph::new(b'C', 5, 7, 0, -6, 6, 793),
    Glyph::new(b'D', 5, 7, 0, -6, 6, 828),
    Glyph::new(b'E', 5, 7, 0, -6, 6, 863),
    Glyph::new(b'F', 5, 7, 0, -6, 6, 898),
    Glyph::new(b'G', 5, 7, 0, -6, 6, 933),
    Glyph::new(b'H', 5, 7, 0, -6, 6, 968),
    Glyph::new(b'I', 3, 7, 1, -6, 6, 1003),
    Glyph::new(b'J', 5, 7, 0, -6, 6, 1024),
    Glyph::new(b'K', 5, 7, 0, -6, 6, 1059),
    Glyph::new(b'L', 5, 7, 0, -6, 6, 1094),
    Glyph::new(b'M', 5, 7, 0, -6, 6, 1129),
    Glyph::new(b'N', 5, 7, 0, -6, 6, 1164),
    Glyph::new(b'O', 5, 7, 0, -6, 6, 1199),
    Glyph::new(b'P', 5, 7, 0, -6, 6, 1234),
    Glyph::new(b'Q', 5, 7, 0, -6, 6, 1269),
    Glyph::new(b'R', 5, 7, 0, -6, 6, 1304),
    Glyph::new(b'S', 5, 7, 0, -6, 6, 1339),
    Glyph::new(b'T', 5, 7, 0, -6, 6, 1374),
    Glyph::new(b'U', 5, 7, 0, -6, 6, 1409),
    Glyph::new(b'V', 5, 7, 0, -6, 6, 1444),
    Glyph::new(b'W', 5, 7, 0, -6, 6, 1479),
    Glyph::new(b'X', 5, 7, 0, -6, 6, 1514),
    Glyph::new(b'Y', 5, 7, 0, -6, 6, 1549),
    Glyph::new(b'Z', 5, 7, 0, -6, 6, 1584),
    Glyph::new(b'[', 3, 7, 1, -6, 6, 1619),
    Glyph::new(b'\\', 5, 5, 0, -6, 6, 1640),
    Glyph::new(b']', 3, 7, 1, -6, 6, 1665),
    Glyph::new(b'^', 5, 3, 0, -6, 6, 1686),
    Glyph::new(b'_', 5, 1, 0, 0, 6, 1701),
    Glyph::new(b'`', 2, 2, 1, -6, 6, 1706),
    Glyph::new(b'a', 5, 5, 0, -4, 6, 1710),
    Glyph::new(b'b', 5, 7, 0, -6, 6, 1735),
    Glyph::new(b'c', 5, 5, 0, -4, 6, 1770),
    Glyph::new(b'd', 5, 7, 0, -6, 6, 1795),
    Glyph::new(b'e', 5, 5, 0, -4, 6, 1830),
    Glyph::new(b'f', 5, 7, 0, -6, 6, 1855),
    Glyph::new(b'g', 5, 6, 0, -5, 6, 1890),
    Glyph::new(b'h', 5, 7, 0, -6, 6, 1920),
    Glyph::new(b'i', 3, 7, 1, -6, 6, 1955),
    Glyph::new(b'j', 4, 7, 0, -6, 6, 1976),
    Glyph::new(b'k', 4, 7, 0, -6, 6, 2004),
    Glyph::new(b'l', 3, 7, 1, -6, 6, 2032),
    Glyph::new(b'm', 5, 5, 0, -4, 6, 2053),
    Glyph::new(b'n', 5, 5, 0, -4, 6, 2078),
    Glyph::new(b'o', 5, 5, 0, -4, 6, 2103),
    Glyph::new(b'p', 5, 5, 0, -4, 6, 2128),
    Glyph::new(b'q', 5, 5, 0, -4, 6, 2153),
    Glyph::new(b'r', 5, 5, 0, -4, 6, 2178),
    Glyph::new(b's', 5, 5, 0, -4, 6, 2203),
    Glyph::new(b't', 5, 7, 0, -6, 6, 2228),
    Glyph::new(b'u', 5, 5, 0, -4, 6, 2263),
    Glyph::new(b'v', 5, 5, 0, -4, 6, 2288),
    Glyph::new(b'w', 5, 5, 0, -4, 6, 2313),
    Glyph::new(b'x', 5, 5, 0, -4, 6, 2338),
    Glyph::new(b'y', 5, 5, 0, -4, 6, 2363),
    Glyph::new(b'z', 5, 5, 0, -4, 6, 2388),
    Glyph::new(b'{', 3, 7, 1, -6, 6, 2413),
    Glyph::new(b'|', 1, 7, 2, -6, 6, 2434),
    Glyph::new(b'}', 3, 7, 1, -6, 6, 2441),
    Glyph::new(b'~', 5, 3, 0, -4, 6, 2462),
];

pub static FIXED_5X7: Font = Font::new(0x20, 0x7E, &GLYPHS, &BITMAP, 8);
