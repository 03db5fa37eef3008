/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::ucd::is_standard_name;

const HANGUL_SYLLABLE_PREFIX: &str = "HANGUL SYLLABLE ";
const CJK_UNIFIED_IDEOGRAPH_PREFIX: &str = "CJK UNIFIED IDEOGRAPH-";
const TANGUT_IDEOGRAPH_PREFIX: &str = "TANGUT IDEOGRAPH-";

const HANGUL_FIRST: u32 = 0xAC00;
const HANGUL_LAST: u32 = 0xD7A3;

const CHOSEONG: [&str; 19] = [
    "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P",
    "H",
];
const JUNGSEONG: [&str; 21] = [
    "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE",
    "WI", "YU", "EU", "YI", "I",
];
const JONGSEONG: [&str; 28] = [
    "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M",
    "B", "BS", "S", "SS", "NG", "J", "C", "K", "T", "P", "H",
];

fn hangul_syllable(c: u32) -> String {
    let s = (c - HANGUL_FIRST) as usize;
    let (l, v, t) = (
        s / (JUNGSEONG.len() * JONGSEONG.len()),
        s % (JUNGSEONG.len() * JONGSEONG.len()) / JONGSEONG.len(),
        s % JONGSEONG.len(),
    );
    format!(
        "{}{}{}{}",
        HANGUL_SYLLABLE_PREFIX, CHOSEONG[l], JUNGSEONG[v], JONGSEONG[t]
    )
}

/// Unicode Name property of `c`, or `""` when it has none.
///
/// Ranges that UnicodeData.txt only lists by `<..., First>`/`<..., Last>`
/// get their derived names; other bracketed labels (controls, private use,
/// surrogates) have no name.
pub fn standard_name(c: u32) -> String {
    if c >= HANGUL_FIRST && c <= HANGUL_LAST {
        return hangul_syllable(c);
    }

    // get_name falls back to charname's range labels where the table has no
    // entry of its own.
    let label = charname::get_name(c);
    if label.contains("CJK Ideograph") {
        return format!("{}{:X}", CJK_UNIFIED_IDEOGRAPH_PREFIX, c);
    }
    if label.contains("Tangut Ideograph") {
        return format!("{}{:X}", TANGUT_IDEOGRAPH_PREFIX, c);
    }

    match charname::get_name_checked(c) {
        Some(name) if !name.is_empty() && is_standard_name(name) => name.to_string(),
        _ => String::new(),
    }
}
