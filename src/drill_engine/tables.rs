//! Fixed tables shared by the topic generators: the fraction/decimal/percent
//! correspondence, statement banks for true/false claims, and unit conversions.

/// One row of the fraction ↔ decimal ↔ percent table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FracDecRow {
    pub frac: &'static str,
    pub dec: &'static str,
    pub pct: &'static str,
    pub num: i64,
    pub den: i64,
}

pub const FRAC_DEC_TABLE: &[FracDecRow] = &[
    FracDecRow { frac: "1/2",  dec: "0,5",  pct: "50", num: 1, den: 2 },
    FracDecRow { frac: "1/4",  dec: "0,25", pct: "25", num: 1, den: 4 },
    FracDecRow { frac: "3/4",  dec: "0,75", pct: "75", num: 3, den: 4 },
    FracDecRow { frac: "1/5",  dec: "0,2",  pct: "20", num: 1, den: 5 },
    FracDecRow { frac: "2/5",  dec: "0,4",  pct: "40", num: 2, den: 5 },
    FracDecRow { frac: "3/5",  dec: "0,6",  pct: "60", num: 3, den: 5 },
    FracDecRow { frac: "4/5",  dec: "0,8",  pct: "80", num: 4, den: 5 },
    FracDecRow { frac: "1/10", dec: "0,1",  pct: "10", num: 1, den: 10 },
    FracDecRow { frac: "3/10", dec: "0,3",  pct: "30", num: 3, den: 10 },
    FracDecRow { frac: "7/10", dec: "0,7",  pct: "70", num: 7, den: 10 },
    FracDecRow { frac: "9/10", dec: "0,9",  pct: "90", num: 9, den: 10 },
];

/// "le tiers de", "les trois quarts de", ...
pub const FRACTION_WORDS: &[(&str, i64, i64)] = &[
    ("la moitié", 1, 2),
    ("le tiers", 1, 3),
    ("le quart", 1, 4),
    ("le cinquième", 1, 5),
    ("le dixième", 1, 10),
    ("les deux tiers", 2, 3),
    ("les trois quarts", 3, 4),
];

/// Numbers offered in ordering questions, with their value in hundredths.
pub const ORDERING_POOL: &[(&str, i64)] = &[
    ("\u{2212}7", -700),
    ("\u{2212}3", -300),
    ("\u{2212}1", -100),
    ("0", 0),
    ("2", 200),
    ("5", 500),
    ("8", 800),
    ("1/2", 50),
    ("1/4", 25),
    ("3/4", 75),
    ("\u{2212}1/2", -50),
    ("0,1", 10),
    ("\u{2212}0,5", -50),
    ("1,5", 150),
];

/// Equiprobable experiments with their simplified probability.
pub const EQUIPROBABLE_SCENARIOS: &[(&str, &str, &str)] = &[
    (
        "On lance un dé équilibré à 6 faces.\nQuelle est la probabilité d'obtenir un nombre pair ?",
        "3/6",
        "1/2",
    ),
    (
        "On lance un dé équilibré à 6 faces.\nQuelle est la probabilité d'obtenir un 6 ?",
        "1/6",
        "1/6",
    ),
    (
        "On lance un dé équilibré à 6 faces.\nQuelle est la probabilité d'obtenir un nombre supérieur à 4 ?",
        "2/6",
        "1/3",
    ),
    (
        "On lance une pièce équilibrée.\nQuelle est la probabilité d'obtenir pile ?",
        "1/2",
        "1/2",
    ),
    (
        "On lance un dé équilibré à 6 faces.\nQuelle est la probabilité d'obtenir un nombre impair ?",
        "3/6",
        "1/2",
    ),
    (
        "Un sac contient 3 boules rouges et 2 boules bleues.\nQuelle est la probabilité de tirer une boule bleue ?",
        "2/5",
        "2/5",
    ),
];

pub const PROBABILITY_DISTRACTORS: &[&str] = &["1/4", "1/3", "2/3", "1/6", "5/6", "1/2", "2/5", "3/5"];

pub const AXIAL_SYMMETRY_STATEMENTS: &[(&str, bool)] = &[
    ("La symétrie axiale conserve les longueurs.", true),
    ("La symétrie axiale conserve les angles.", true),
    ("La symétrie axiale conserve les aires.", true),
    ("Un cercle a exactement un axe de symétrie.", false),
    ("Un carré a exactement 4 axes de symétrie.", true),
    ("Un rectangle (non carré) a exactement 2 axes de symétrie.", true),
    ("Un triangle équilatéral a exactement 3 axes de symétrie.", true),
    ("La symétrie axiale transforme une droite en une droite parallèle.", false),
];

pub const CENTRAL_SYMMETRY_STATEMENTS: &[(&str, bool)] = &[
    ("La symétrie centrale conserve les longueurs.", true),
    ("La symétrie centrale conserve les angles.", true),
    ("Par une symétrie centrale, l'image d'un segment est un segment parallèle de même longueur.", true),
    ("Un parallélogramme a un centre de symétrie.", true),
    ("Un triangle équilatéral a un centre de symétrie.", false),
    ("Un cercle a un centre de symétrie : son centre.", true),
    ("La symétrie centrale conserve les aires.", true),
    ("Un rectangle a un centre de symétrie.", true),
];

// ---------------------------------------------------------------------------
// Unit conversions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrasing {
    /// "Convertir 3 m en cm." → `v × factor`
    Convert,
    /// "300 cm = ? m" → `v`, the displayed quantity is `v × factor`
    Inverse,
    /// "Un film dure 120 min. Combien d'heures ?" → `v`
    FilmHours,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub from: &'static str,
    pub to: &'static str,
    pub factor: i64,
    pub min: i64,
    pub max: i64,
    pub phrasing: Phrasing,
}

const fn convert(from: &'static str, to: &'static str, factor: i64, min: i64, max: i64) -> Conversion {
    Conversion { from, to, factor, min, max, phrasing: Phrasing::Convert }
}

const fn inverse(from: &'static str, to: &'static str, factor: i64, min: i64, max: i64) -> Conversion {
    Conversion { from, to, factor, min, max, phrasing: Phrasing::Inverse }
}

impl Conversion {
    /// Question text and integer answer for the drawn value `v`.
    pub fn render(&self, v: i64) -> (String, i64) {
        match self.phrasing {
            Phrasing::Convert => (
                format!("Convertir {} {} en {}.", v, self.from, self.to),
                v * self.factor,
            ),
            Phrasing::Inverse => (
                format!("{} {} = ? {}", v * self.factor, self.from, self.to),
                v,
            ),
            Phrasing::FilmHours => (
                format!("Un film dure {} min. Combien d'heures ?", v * self.factor),
                v,
            ),
        }
    }
}

/// Mixed quantities asked in the geometry topic.
pub const MIXED_CONVERSIONS: &[Conversion] = &[
    convert("m", "cm", 100, 1, 15),
    convert("cm", "mm", 10, 1, 30),
    convert("km", "m", 1000, 1, 10),
    convert("L", "mL", 1000, 1, 5),
    convert("L", "cL", 100, 1, 8),
    convert("kg", "g", 1000, 1, 10),
    convert("h", "min", 60, 1, 5),
    Conversion { from: "min", to: "h", factor: 60, min: 1, max: 5, phrasing: Phrasing::FilmHours },
];

pub const LENGTH_CONVERSIONS: &[Conversion] = &[
    convert("m", "cm", 100, 1, 15),
    convert("cm", "mm", 10, 1, 30),
    convert("km", "m", 1000, 1, 10),
    inverse("cm", "m", 100, 1, 10),
    inverse("m", "km", 1000, 1, 10),
];

pub const AREA_CONVERSIONS: &[Conversion] = &[
    convert("m\u{b2}", "dm\u{b2}", 100, 1, 5),
    convert("dm\u{b2}", "cm\u{b2}", 100, 1, 5),
    convert("cm\u{b2}", "mm\u{b2}", 100, 1, 5),
    inverse("dm\u{b2}", "m\u{b2}", 100, 1, 5),
    inverse("cm\u{b2}", "dm\u{b2}", 100, 1, 5),
];

/// Volume conversions as asked in the geometry topic.
pub const VOLUME_CONVERSIONS: &[Conversion] = &[
    convert("m\u{b3}", "dm\u{b3}", 1000, 1, 3),
    convert("dm\u{b3}", "cm\u{b3}", 1000, 1, 3),
    convert("dm\u{b3}", "L", 1, 1, 10),
    inverse("cm\u{b3}", "dm\u{b3}", 1000, 1, 3),
    inverse("dm\u{b3}", "m\u{b3}", 1000, 1, 3),
];

/// Volume conversions of the themed session; litres are drilled separately.
pub const SOLID_VOLUME_CONVERSIONS: &[Conversion] = &[
    convert("m\u{b3}", "dm\u{b3}", 1000, 1, 3),
    convert("dm\u{b3}", "cm\u{b3}", 1000, 1, 3),
    inverse("cm\u{b3}", "dm\u{b3}", 1000, 1, 3),
    inverse("dm\u{b3}", "m\u{b3}", 1000, 1, 3),
];

pub const CAPACITY_CONVERSIONS: &[Conversion] = &[
    convert("L", "mL", 1000, 1, 5),
    convert("L", "cL", 100, 1, 8),
    convert("L", "dL", 10, 1, 10),
    convert("dm\u{b3}", "L", 1, 1, 10),
    convert("m\u{b3}", "L", 1000, 1, 3),
    inverse("mL", "L", 1000, 1, 5),
    inverse("cL", "L", 100, 1, 8),
    inverse("dL", "L", 10, 1, 10),
    inverse("L", "m\u{b3}", 1000, 1, 3),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frac_dec_rows_are_consistent() {
        for row in FRAC_DEC_TABLE {
            let dec: f64 = row.dec.replace(',', ".").parse().unwrap();
            let pct: f64 = row.pct.parse().unwrap();
            let value = row.num as f64 / row.den as f64;
            assert!((dec - value).abs() < 1e-9, "{}", row.frac);
            assert!((pct - value * 100.0).abs() < 1e-9, "{}", row.frac);
            assert_eq!(row.frac, format!("{}/{}", row.num, row.den));
        }
    }

    #[test]
    fn ordering_pool_displays_match_their_values() {
        for &(display, hundredths) in ORDERING_POOL {
            assert!(!display.contains('-'), "ASCII minus in {display}");
            let value = crate::drill_engine::checker::parse_number(display).unwrap();
            assert!((value * 100.0 - hundredths as f64).abs() < 1e-9, "{display}");
        }
    }

    #[test]
    fn inverse_conversion_shows_the_small_unit_quantity() {
        let (q, a) = inverse("cm", "m", 100, 1, 10).render(4);
        assert_eq!(q, "400 cm = ? m");
        assert_eq!(a, 4);
        let (q, a) = MIXED_CONVERSIONS[7].render(2);
        assert_eq!(q, "Un film dure 120 min. Combien d'heures ?");
        assert_eq!(a, 2);
    }
}
