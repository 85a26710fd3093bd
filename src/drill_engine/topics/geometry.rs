use rand::RngCore;

use crate::drill_engine::{
    helpers::{integer_input, multiple_choice, true_false},
    models::{Category, Question},
    rng::{chance, pick_one, random_int},
    tables::{AREA_CONVERSIONS, AXIAL_SYMMETRY_STATEMENTS, CENTRAL_SYMMETRY_STATEMENTS, MIXED_CONVERSIONS, VOLUME_CONVERSIONS},
    topics::{conversions, Generator},
};

const CAT: Category = Category::Geometry;

/// Shifts applied to an angle to make a false claim.
const ANGLE_SHIFTS: &[i64] = &[5, 10, 15, -5, -10];

pub const GENERATORS: &[Generator] = &[
    rectangle_area,
    circle_circumference,
    cube_volume,
    third_angle,
    triangle_area,
    alternate_interior_angles,
    disk_area,
    prism_volume,
    cylinder_volume,
    vertical_angles,
    supplementary_angle,
    complementary_angle,
    mixed_conversion,
    area_conversion,
    volume_conversion,
    axial_symmetry,
    central_symmetry,
];

pub fn generate(rng: &mut dyn RngCore) -> Question {
    let family = *pick_one(rng, GENERATORS);
    family(rng)
}

pub fn rectangle_area(rng: &mut dyn RngCore) -> Question {
    let l = random_int(rng, 3, 12);
    let w = random_int(rng, 2, 10);
    integer_input(
        CAT,
        format!("Aire d'un rectangle de longueur {l} cm et largeur {w} cm (en cm²) ?"),
        l * w,
    )
}

/// The answer keeps π symbolic: `2πr` is shown as `{2r}π cm`.
pub fn circle_circumference(rng: &mut dyn RngCore) -> Question {
    let r = random_int(rng, 2, 10);
    let d = 2 * r;
    multiple_choice(
        rng,
        CAT,
        format!("Quel est le périmètre d'un cercle de rayon {r} cm ?"),
        format!("{d}π cm"),
        vec![format!("{r}π cm"), format!("{}π cm", r * r), format!("{} cm", 2 * d)],
    )
}

pub fn cube_volume(rng: &mut dyn RngCore) -> Question {
    let c = random_int(rng, 2, 8);
    integer_input(CAT, format!("Volume d'un cube d'arête {c} cm (en cm³) ?"), c.pow(3))
}

pub fn third_angle(rng: &mut dyn RngCore) -> Question {
    let a = random_int(rng, 30, 80);
    let b = random_int(rng, 20, 150 - a);
    integer_input(
        CAT,
        format!("Un triangle a deux angles de {a}° et {b}°.\nQuel est le troisième angle (en °) ?"),
        180 - a - b,
    )
}

/// Even bases only, so `base × h / 2` is whole.
pub fn triangle_area(rng: &mut dyn RngCore) -> Question {
    let base = *pick_one(rng, &[4, 6, 8, 10, 12]);
    let h = *pick_one(rng, &[3, 5, 6, 7, 8]);
    integer_input(
        CAT,
        format!("Aire d'un triangle de base {base} cm et hauteur {h} cm (en cm²) ?"),
        base * h / 2,
    )
}

pub fn alternate_interior_angles(rng: &mut dyn RngCore) -> Question {
    let angle = random_int(rng, 30, 150);
    let holds = chance(rng, 0.5);
    let stated = if holds { angle } else { angle + *pick_one(rng, ANGLE_SHIFTS) };
    true_false(
        CAT,
        format!(
            "Deux droites parallèles sont coupées par une sécante.\nSi un angle vaut {angle}°, l'angle alterne-interne vaut {stated}°."
        ),
        holds,
    )
}

pub fn disk_area(rng: &mut dyn RngCore) -> Question {
    let r = random_int(rng, 2, 8);
    let sq = r * r;
    multiple_choice(
        rng,
        CAT,
        format!("Quelle est l'aire d'un disque de rayon {r} cm ?"),
        format!("{sq}π cm²"),
        vec![format!("{}π cm²", 2 * r), format!("{r}π cm²"), format!("{}π cm²", 2 * sq)],
    )
}

pub fn prism_volume(rng: &mut dyn RngCore) -> Question {
    let l = random_int(rng, 2, 8);
    let w = random_int(rng, 2, 6);
    let h = random_int(rng, 2, 6);
    integer_input(
        CAT,
        format!("Volume d'un pavé droit de {l} cm, {w} cm et {h} cm (en cm³) ?"),
        l * w * h,
    )
}

pub fn cylinder_volume(rng: &mut dyn RngCore) -> Question {
    let r = random_int(rng, 2, 6);
    let h = random_int(rng, 2, 8);
    multiple_choice(
        rng,
        CAT,
        format!("Volume d'un cylindre de rayon {r} cm et hauteur {h} cm ?"),
        format!("{}π cm³", r * r * h),
        vec![
            format!("{}π cm³", 2 * r * h),
            format!("{}π cm³", r * r),
            format!("{}π cm³", r * h),
        ],
    )
}

/// True 60 % of the time.
pub fn vertical_angles(rng: &mut dyn RngCore) -> Question {
    let angle = random_int(rng, 20, 160);
    let same = chance(rng, 0.6);
    let stated = if same { angle } else { angle + *pick_one(rng, ANGLE_SHIFTS) };
    true_false(
        CAT,
        format!("Deux angles sont opposés par le sommet.\nL'un mesure {angle}°, l'autre mesure {stated}°."),
        same,
    )
}

pub fn supplementary_angle(rng: &mut dyn RngCore) -> Question {
    let a = random_int(rng, 20, 160);
    integer_input(
        CAT,
        format!("Deux angles sont supplémentaires.\nL'un mesure {a}°. Combien mesure l'autre (en °) ?"),
        180 - a,
    )
}

pub fn complementary_angle(rng: &mut dyn RngCore) -> Question {
    let a = random_int(rng, 5, 85);
    integer_input(
        CAT,
        format!("Deux angles sont complémentaires.\nL'un mesure {a}°. Combien mesure l'autre (en °) ?"),
        90 - a,
    )
}

pub fn mixed_conversion(rng: &mut dyn RngCore) -> Question {
    conversions::from_table(rng, MIXED_CONVERSIONS)
}

pub fn area_conversion(rng: &mut dyn RngCore) -> Question {
    conversions::from_table(rng, AREA_CONVERSIONS)
}

pub fn volume_conversion(rng: &mut dyn RngCore) -> Question {
    conversions::from_table(rng, VOLUME_CONVERSIONS)
}

pub fn axial_symmetry(rng: &mut dyn RngCore) -> Question {
    let &(text, holds) = pick_one(rng, AXIAL_SYMMETRY_STATEMENTS);
    true_false(CAT, text, holds)
}

pub fn central_symmetry(rng: &mut dyn RngCore) -> Question {
    let &(text, holds) = pick_one(rng, CENTRAL_SYMMETRY_STATEMENTS);
    true_false(CAT, text, holds)
}
