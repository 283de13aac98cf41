// Per-letter rule cascades
//
// Each handler looks at the window around the cursor and returns exactly one
// transition. Rules inside a handler are tried top to bottom and the first
// match wins, so their order matters.

use metaphone_core::character::{LetterClass, classify, is_vowel};

use super::transition::Transition;
use super::window::Window;

/// Pick the transition for the letter under the cursor.
pub fn transition_for(w: &Window<'_>) -> Transition {
    match classify(w.at(0)) {
        LetterClass::Vowel => vowel(w),
        LetterClass::Consonant(letter) => match letter {
            'B' => b(w),
            'C' => c(w),
            'D' => d(w),
            'F' => doubled(w, 'F', "F"),
            'G' => g(w),
            'H' => h(w),
            'J' => j(w),
            'K' => doubled(w, 'K', "K"),
            'L' => l(w),
            'M' => m(w),
            'N' => doubled(w, 'N', "N"),
            'P' => p(w),
            'Q' => doubled(w, 'Q', "K"),
            'R' => r(w),
            'S' => s(w),
            'T' => t(w),
            'V' => doubled(w, 'V', "F"),
            'W' => w_(w),
            'X' => x(w),
            'Z' => z(w),
            _ => Transition::skip(1),
        },
        LetterClass::Space | LetterClass::Other => Transition::skip(1),
    }
}

/// Letters whose only rule is "emit `symbol`, swallow a doubled letter".
fn doubled(w: &Window<'_>, letter: char, symbol: &'static str) -> Transition {
    Transition::emit(symbol, if w.is(1, letter) { 2 } else { 1 })
}

/// All initial vowels map to `A`; other vowels are dropped.
fn vowel(w: &Window<'_>) -> Transition {
    if w.at_start() {
        Transition::emit("A", 1)
    } else {
        Transition::skip(1)
    }
}

/// Only a doubled B is absorbed; the B of a final "-mb" is still coded.
fn b(w: &Window<'_>) -> Transition {
    doubled(w, 'B', "P")
}

// ---------------------------------------------------------------------------
// C
// ---------------------------------------------------------------------------

fn c(w: &Window<'_>) -> Transition {
    // Germanic "-ACH-", but not "-ACHI-"/"-ACHE-" unless BACHER/MACHER
    if w.past_start(1)
        && !w.is_vowel(-2)
        && w.matches(-1, "ACH")
        && !w.is(2, 'I')
        && (!w.is(2, 'E') || w.matches_any(-2, &["BACHER", "MACHER"]))
    {
        return Transition::emit("K", 2);
    }

    if w.at_start() && w.word_starts_with("CAESAR") {
        return Transition::emit("S", 2);
    }

    // chianti
    if w.matches(0, "CHIA") {
        return Transition::emit("K", 2);
    }

    if w.matches(0, "CH") {
        return ch(w);
    }

    // czerny
    if w.matches(0, "CZ") && !w.matches(-2, "WICZ") {
        return Transition::split("S", "X", 2);
    }

    // focaccia
    if w.matches(1, "CIA") {
        return Transition::emit("X", 3);
    }

    // Double C, but not McClellan
    if w.matches(0, "CC") && !(w.cursor() == w.start() + 1 && w.first_letter() == 'M') {
        return cc(w);
    }

    if w.matches_any(0, &["CK", "CG", "CQ"]) {
        return Transition::emit("K", 2);
    }

    if w.matches_any(0, &["CI", "CE", "CY"]) {
        // Italian vs. English
        if w.matches_any(0, &["CIO", "CIE", "CIA"]) {
            return Transition::split("S", "X", 2);
        }
        return Transition::emit("S", 2);
    }

    // "mac caffrey", "mac gregor"
    if w.matches_any(1, &[" C", " Q", " G"]) {
        return Transition::emit("K", 3);
    }

    if w.is_any(1, &['C', 'K', 'Q']) && !w.matches_any(1, &["CE", "CI"]) {
        return Transition::emit("K", 2);
    }

    Transition::emit("K", 1)
}

fn ch(w: &Window<'_>) -> Transition {
    // michael
    if w.past_start(0) && w.matches(0, "CHAE") {
        return Transition::split("K", "X", 2);
    }

    // Greek roots at the start of the word: chorus, chemistry, chymical
    if w.at_start()
        && (w.matches_any(1, &["HARAC", "HARIS"]) || w.matches_any(1, &["HOR", "HYM", "HIA", "HEM"]))
        && !w.word_starts_with("CHORE")
    {
        return Transition::emit("K", 2);
    }

    // Germanic, Greek, or otherwise CH for a KH sound
    if w.word_starts_with_any(&["VAN ", "VON ", "SCH"])
        || w.matches_any(-2, &["ORCHES", "ARCHIT", "ORCHID"])
        || w.is_any(2, &['T', 'S'])
        || ((w.is_any(-1, &['A', 'O', 'U', 'E']) || w.at_start())
            && w.is_any(2, &['L', 'R', 'N', 'M', 'B', 'H', 'F', 'V', 'W']))
    {
        return Transition::emit("K", 2);
    }

    if w.past_start(0) {
        if w.word_starts_with("MC") {
            return Transition::emit("K", 2);
        }
        return Transition::split("X", "K", 2);
    }
    Transition::emit("X", 2)
}

fn cc(w: &Window<'_>) -> Transition {
    // bellocchio, but not bacchus
    if w.is_any(2, &['I', 'E', 'H']) && !w.matches(2, "HU") {
        // accident, accede, succeed
        if (w.cursor() == w.start() + 1 && w.first_letter() == 'A')
            || w.matches_any(-1, &["UCCEE", "UCCES"])
        {
            return Transition::emit("KS", 3);
        }
        // bacci, bertucci
        return Transition::emit("X", 3);
    }
    Transition::emit("K", 2)
}

// ---------------------------------------------------------------------------
// D
// ---------------------------------------------------------------------------

fn d(w: &Window<'_>) -> Transition {
    if w.matches(0, "DG") {
        // edge
        if w.is_any(2, &['I', 'E', 'Y']) {
            return Transition::emit("J", 3);
        }
        // edgar
        return Transition::emit("TK", 2);
    }
    if w.matches_any(0, &["DT", "DD"]) {
        return Transition::emit("T", 2);
    }
    Transition::emit("T", 1)
}

// ---------------------------------------------------------------------------
// G
// ---------------------------------------------------------------------------

fn g(w: &Window<'_>) -> Transition {
    if w.is(1, 'H') {
        return gh(w);
    }

    if w.is(1, 'N') {
        if w.cursor() == w.start() + 1 && is_vowel(w.first_letter()) && !w.slavo_germanic() {
            return Transition::split("KN", "N", 2);
        }
        // not cagney
        if !w.matches(2, "EY") && !w.slavo_germanic() {
            return Transition::split("N", "KN", 2);
        }
        return Transition::emit("KN", 2);
    }

    // tagliaro
    if w.matches(1, "LI") && !w.slavo_germanic() {
        return Transition::split("KL", "L", 2);
    }

    // -ges-, -gep-, -gel-, -gie- at the beginning
    if w.at_start()
        && (w.is(1, 'Y')
            || w.matches_any(
                1,
                &["ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER"],
            ))
    {
        return Transition::split("K", "J", 2);
    }

    // -ger-, -gy-
    if (w.matches(1, "ER") || w.is(1, 'Y'))
        && !w.word_starts_with_any(&["DANGER", "RANGER", "MANGER"])
        && !w.is_any(-1, &['E', 'I'])
        && !w.matches_any(-1, &["RGY", "OGY"])
    {
        return Transition::split("K", "J", 2);
    }

    // Italian, e.g. biaggi
    if w.is_any(1, &['E', 'I', 'Y']) || w.matches_any(-1, &["AGGI", "OGGI"]) {
        // obvious Germanic
        if w.word_starts_with_any(&["VON ", "VAN ", "SCH"]) || w.matches(1, "ET") {
            return Transition::emit("K", 2);
        }
        // always soft with a French ending
        if w.matches(1, "IER ") {
            return Transition::emit("J", 2);
        }
        return Transition::split("J", "K", 2);
    }

    doubled(w, 'G', "K")
}

fn gh(w: &Window<'_>) -> Transition {
    if w.past_start(0) && !w.is_vowel(-1) {
        return Transition::emit("K", 2);
    }

    // ghislane, ghiradelli
    if w.at_start() {
        if w.is(2, 'I') {
            return Transition::emit("J", 2);
        }
        return Transition::emit("K", 2);
    }

    // Parker's rule, with refinements: hugh, bough, broughton
    if (w.past_start(1) && w.is_any(-2, &['B', 'H', 'D']))
        || (w.past_start(2) && w.is_any(-3, &['B', 'H', 'D']))
        || (w.past_start(3) && w.is_any(-4, &['B', 'H']))
    {
        return Transition::skip(2);
    }

    // laugh, McLaughlin, cough, gough, rough, tough
    if w.past_start(2) && w.is(-1, 'U') && w.is_any(-3, &['C', 'G', 'L', 'R', 'T']) {
        return Transition::emit("F", 2);
    }

    if w.past_start(0) && !w.is(-1, 'I') {
        return Transition::emit("K", 2);
    }

    Transition::skip(2)
}

// ---------------------------------------------------------------------------
// H, J
// ---------------------------------------------------------------------------

/// H is kept only at the start or between vowels; this also swallows HH.
fn h(w: &Window<'_>) -> Transition {
    if (w.at_start() || w.is_vowel(-1)) && w.is_vowel(1) {
        return Transition::emit("H", 2);
    }
    Transition::skip(1)
}

fn j(w: &Window<'_>) -> Transition {
    let advance = if w.is(1, 'J') { 2 } else { 1 };

    // Obvious Spanish: jose, san jacinto
    if w.matches(0, "JOSE") || w.word_starts_with("SAN ") {
        if (w.at_start() && w.is(4, ' ')) || w.word_starts_with("SAN ") {
            return Transition::emit("H", advance);
        }
        return Transition::split("J", "H", advance);
    }

    // Yankelovich / Jankelowicz
    if w.at_start() {
        return Transition::split("J", "A", advance);
    }

    // Spanish pronunciation of e.g. bajador
    if w.is_vowel(-1) && !w.slavo_germanic() && w.is_any(1, &['A', 'O']) {
        return Transition::split("J", "H", advance);
    }

    if w.at_end() {
        return Transition::split("J", "", advance);
    }

    if !w.is_any(1, &['L', 'T', 'K', 'S', 'N', 'M', 'B', 'Z'])
        && !w.is_any(-1, &['S', 'K', 'L'])
    {
        return Transition::emit("J", advance);
    }

    Transition::skip(advance)
}

// ---------------------------------------------------------------------------
// L, M, P, R
// ---------------------------------------------------------------------------

fn l(w: &Window<'_>) -> Transition {
    if !w.is(1, 'L') {
        return Transition::emit("L", 1);
    }
    // Spanish, e.g. cabrillo, gallegos
    if (w.cursor() + 2 == w.end() && w.matches_any(-1, &["ILLO", "ILLA", "ALLE"]))
        || ((w.word_ends_with_any(&["AS", "OS"]) || matches!(w.last_letter(), 'A' | 'O'))
            && w.matches(-1, "ALLE"))
    {
        return Transition::split("L", "", 2);
    }
    Transition::emit("L", 2)
}

fn m(w: &Window<'_>) -> Transition {
    if (w.matches(1, "UMB") && (w.cursor() + 1 == w.end() || w.matches(2, "ER")))
        || w.is(1, 'M')
    {
        return Transition::emit("M", 2);
    }
    Transition::emit("M", 1)
}

fn p(w: &Window<'_>) -> Transition {
    if w.is(1, 'H') {
        return Transition::emit("F", 2);
    }
    // campbell, raspberry
    if w.is_any(1, &['P', 'B']) {
        return Transition::emit("P", 2);
    }
    Transition::emit("P", 1)
}

fn r(w: &Window<'_>) -> Transition {
    let advance = if w.is(1, 'R') { 2 } else { 1 };
    // French, e.g. rogier, but not hochmeier
    if w.at_end()
        && !w.slavo_germanic()
        && w.matches(-2, "IE")
        && !w.matches_any(-4, &["ME", "MA"])
    {
        return Transition::split("", "R", advance);
    }
    Transition::emit("R", advance)
}

// ---------------------------------------------------------------------------
// S
// ---------------------------------------------------------------------------

fn s(w: &Window<'_>) -> Transition {
    // island, isle, carlisle, carlysle
    if w.matches_any(-1, &["ISL", "YSL"]) {
        return Transition::skip(1);
    }

    // sugar-
    if w.at_start() && w.word_starts_with("SUGAR") {
        return Transition::split("X", "S", 1);
    }

    if w.matches(0, "SH") {
        // Germanic
        if w.matches_any(1, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
            return Transition::emit("S", 2);
        }
        return Transition::emit("X", 2);
    }

    // Italian and Armenian
    if w.matches_any(0, &["SIO", "SIA"]) || w.matches(0, "SIAN") {
        if !w.slavo_germanic() {
            return Transition::split("S", "X", 3);
        }
        return Transition::emit("S", 3);
    }

    // German and anglicisations: smith/schmidt, snider/schneider.
    // Also -SZ- in Slavic languages, although Hungarian pronounces it S.
    if (w.at_start() && w.is_any(1, &['M', 'N', 'L', 'W'])) || w.is(1, 'Z') {
        let advance = if w.is(1, 'Z') { 2 } else { 1 };
        return Transition::split("S", "X", advance);
    }

    if w.matches(0, "SC") {
        return sc(w);
    }

    // French, e.g. resnais, artois
    if w.at_end() && w.matches_any(-2, &["AI", "OI"]) {
        return Transition::split("", "S", 1);
    }

    let advance = if w.is_any(1, &['S', 'Z']) { 2 } else { 1 };
    Transition::emit("S", advance)
}

/// Schlesinger's rule.
fn sc(w: &Window<'_>) -> Transition {
    if w.is(2, 'H') {
        // Dutch origin: school, schooner
        if w.matches_any(3, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
            // schermerhorn, schenker
            if w.matches_any(3, &["ER", "EN"]) {
                return Transition::split("X", "SK", 3);
            }
            return Transition::emit("SK", 3);
        }
        if w.at_start() && !w.is_vowel(3) && !w.is(3, 'W') {
            return Transition::split("X", "S", 3);
        }
        return Transition::emit("X", 3);
    }
    if w.is_any(2, &['I', 'E', 'Y']) {
        return Transition::emit("S", 3);
    }
    Transition::emit("SK", 3)
}

// ---------------------------------------------------------------------------
// T, W, X, Z
// ---------------------------------------------------------------------------

fn t(w: &Window<'_>) -> Transition {
    if w.matches(0, "TION") {
        return Transition::emit("X", 3);
    }
    if w.matches_any(0, &["TIA", "TCH"]) {
        return Transition::emit("X", 3);
    }
    if w.matches(0, "TH") || w.matches(0, "TTH") {
        // thomas, thames, or Germanic
        if w.matches_any(2, &["OM", "AM"]) || w.word_starts_with_any(&["VON ", "VAN ", "SCH"]) {
            return Transition::emit("T", 2);
        }
        return Transition::split("0", "T", 2);
    }
    if w.is_any(1, &['T', 'D']) {
        return Transition::emit("T", 2);
    }
    Transition::emit("T", 1)
}

fn w_(w: &Window<'_>) -> Transition {
    // can also be in the middle of a word
    if w.matches(0, "WR") {
        return Transition::emit("R", 2);
    }

    if w.at_start() && (w.is_vowel(1) || w.matches(0, "WH")) {
        // Wasserman should match Vasserman
        if w.is_vowel(1) {
            return Transition::split("A", "F", 1);
        }
        return Transition::emit("A", 1);
    }

    // Arnow should match Arnoff
    if (w.at_end() && w.is_vowel(-1))
        || w.matches_any(-1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
        || w.word_starts_with("SCH")
    {
        return Transition::split("", "F", 1);
    }

    // Polish, e.g. filipowicz
    if w.matches_any(0, &["WICZ", "WITZ"]) {
        return Transition::split("TS", "FX", 4);
    }

    Transition::skip(1)
}

fn x(w: &Window<'_>) -> Transition {
    let advance = if w.is_any(1, &['C', 'X']) { 2 } else { 1 };
    // French, e.g. breaux
    if w.at_end() && (w.matches_any(-3, &["IAU", "EAU"]) || w.matches_any(-2, &["AU", "OU"])) {
        return Transition::skip(advance);
    }
    Transition::emit("KS", advance)
}

fn z(w: &Window<'_>) -> Transition {
    let advance = if w.is_any(1, &['Z', 'H']) { 2 } else { 1 };
    // Chinese pinyin, e.g. zhao
    if w.is(1, 'H') {
        return Transition::emit("J", advance);
    }
    if w.matches_any(1, &["ZO", "ZI", "ZA"])
        || (w.slavo_germanic() && w.past_start(0) && !w.is(-1, 'T'))
    {
        return Transition::split("S", "TS", advance);
    }
    Transition::emit("S", advance)
}
