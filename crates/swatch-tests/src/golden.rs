//! Golden display values.
//!
//! Each row is one input typed into one field group, and the snapshot the
//! session must show for it. Reference values were computed independently in
//! double precision with round-half-away-from-zero.

use swatch_core::Representation;
use swatch_session::{parse_color, Snapshot};

struct Golden {
    repr: Representation,
    input: &'static [&'static str],
    cmyk: [i64; 4],
    lab: [i64; 3],
    rgb: [u8; 3],
    hex: &'static str,
    out_of_gamut: bool,
}

const fn row(
    repr: Representation,
    input: &'static [&'static str],
    cmyk: [i64; 4],
    lab: [i64; 3],
    rgb: [u8; 3],
    hex: &'static str,
    out_of_gamut: bool,
) -> Golden {
    Golden {
        repr,
        input,
        cmyk,
        lab,
        rgb,
        hex,
        out_of_gamut,
    }
}

use Representation::{Cmyk, Lab, Rgb};

// ---------------------------------------------------------------------------
// Reference table
// ---------------------------------------------------------------------------

const GOLDEN: &[Golden] = &[
    // RGB primaries and neutrals
    row(Rgb, &["255", "0", "0"], [0, 100, 100, 0], [53, 80, 67], [255, 0, 0], "#ff0000", false),
    row(Rgb, &["0", "255", "0"], [100, 0, 100, 0], [88, -86, 83], [0, 255, 0], "#00ff00", false),
    row(Rgb, &["0", "0", "255"], [100, 100, 0, 0], [32, 79, -108], [0, 0, 255], "#0000ff", false),
    row(Rgb, &["255", "255", "255"], [0, 0, 0, 0], [100, 0, 0], [255, 255, 255], "#ffffff", false),
    row(Rgb, &["0", "0", "0"], [0, 0, 0, 100], [0, 0, 0], [0, 0, 0], "#000000", false),
    row(Rgb, &["128", "128", "128"], [0, 0, 0, 50], [54, 0, 0], [128, 128, 128], "#808080", false),
    // RGB mixed
    row(Rgb, &["10", "171", "3"], [94, 0, 98, 33], [61, -63, 61], [10, 171, 3], "#0aab03", false),
    row(Rgb, &["255", "136", "0"], [0, 47, 100, 0], [69, 39, 75], [255, 136, 0], "#ff8800", false),
    row(Rgb, &["51", "102", "153"], [67, 33, 0, 40], [42, 0, -33], [51, 102, 153], "#336699", false),
    row(Rgb, &["200", "150", "100"], [0, 25, 50, 22], [66, 13, 34], [200, 150, 100], "#c89664", false),
    // CMYK
    row(Cmyk, &["0", "100", "100", "0"], [0, 100, 100, 0], [53, 80, 67], [255, 0, 0], "#ff0000", false),
    row(Cmyk, &["20", "40", "60", "10"], [20, 40, 60, 10], [61, 12, 31], [184, 138, 92], "#b88a5c", false),
    row(Cmyk, &["0", "0", "0", "100"], [0, 0, 0, 100], [0, 0, 0], [0, 0, 0], "#000000", false),
    row(Cmyk, &["100", "0", "0", "0"], [100, 0, 0, 0], [91, -48, -14], [0, 255, 255], "#00ffff", false),
    // Lab, in gamut
    row(Lab, &["50", "0", "0"], [0, 0, 0, 53], [50, 0, 0], [119, 119, 119], "#777777", false),
    row(Lab, &["75", "20", "-30"], [19, 27, 0, 6], [75, 20, -30], [194, 175, 240], "#c2aff0", false),
    row(Lab, &["0", "0", "0"], [0, 0, 0, 100], [0, 0, 0], [0, 0, 0], "#000000", false),
    row(Lab, &["100", "0", "0"], [0, 0, 0, 0], [100, 0, 0], [255, 255, 255], "#ffffff", false),
    // Lab, outside sRGB
    row(Lab, &["30", "60", "-90"], [100, 83, 0, 15], [30, 60, -90], [0, 36, 217], "#0024d9", true),
    row(Lab, &["50", "-128", "127"], [100, 0, 100, 40], [50, -128, 127], [0, 152, 0], "#009800", true),
];

#[test]
fn test_golden_snapshots() {
    for g in GOLDEN {
        let set = parse_color(g.repr, g.input).unwrap();
        let snap = Snapshot::from_set(&set);
        let ctx = format!("{} {:?}", g.repr, g.input);
        assert_eq!(snap.cmyk, g.cmyk, "cmyk for {ctx}");
        assert_eq!(snap.lab, g.lab, "lab for {ctx}");
        assert_eq!(snap.rgb, g.rgb, "rgb for {ctx}");
        assert_eq!(snap.hex, g.hex, "hex for {ctx}");
        assert_eq!(snap.out_of_gamut, g.out_of_gamut, "gamut flag for {ctx}");
        assert_eq!(snap.source, g.repr);
    }
}

#[test]
fn test_golden_hex_reaches_same_display() {
    // In-gamut rows typed as hex land on the same CMYK/Lab as their RGB.
    for g in GOLDEN.iter().filter(|g| g.repr == Rgb) {
        let rgb = swatch_color::hex_to_color(g.hex).unwrap();
        let snap = Snapshot::from_set(&swatch_color::ColorSet::from_rgb(rgb));
        assert_eq!(snap.cmyk, g.cmyk, "{}", g.hex);
        assert_eq!(snap.lab, g.lab, "{}", g.hex);
    }
}

#[test]
fn test_golden_output_strings() {
    let red = Snapshot::from_set(&parse_color(Rgb, &["255", "0", "0"]).unwrap());
    assert_eq!(red.output_text(Cmyk), "cmyk(0%, 100%, 100%, 0%)");
    assert_eq!(red.output_text(Lab), "lab(53, 80, 67)");
    assert_eq!(red.output_text(Rgb), "rgb(255, 0, 0)");

    let blue = Snapshot::from_set(&parse_color(Rgb, &["0", "0", "255"]).unwrap());
    assert_eq!(blue.output_text(Lab), "lab(32, 79, -108)");
}
