// Properties of the carving engine, exercised through the public API
// only.

use image::{Rgb, RgbImage};
use seamcarver::{EnergyField, SeamCarver, SeamError, BORDER_ENERGY};

// A busy, deterministic test card: overlapping stripes and a
// multiplicative pattern so no two neighbourhoods look alike.
fn test_card(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            ((x * 37 + y * 11) % 256) as u8,
            ((x * y * 7 + 3) % 256) as u8,
            ((y * 53 + x * x) % 256) as u8,
        ])
    })
}

fn assert_energy_is_fresh(carver: &SeamCarver) {
    let fresh = EnergyField::new(carver.pixels());
    for y in 0..carver.height() {
        for x in 0..carver.width() {
            assert_eq!(
                carver.energy_at(x, y),
                fresh.energy_at(x, y),
                "stale energy at ({}, {}) in a {}x{} image",
                x,
                y,
                carver.width(),
                carver.height()
            );
        }
    }
}

fn assert_connected(seam: &[u32]) {
    for pair in seam.windows(2) {
        let step = pair[0].max(pair[1]) - pair[0].min(pair[1]);
        assert!(step <= 1, "seam {:?} is not connected", seam);
    }
}

#[test]
fn border_pixels_always_report_the_border_constant() {
    for &(width, height) in &[(1, 1), (2, 3), (6, 4), (9, 9)] {
        let carver = SeamCarver::new(&test_card(width, height)).unwrap();
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    assert_eq!(carver.energy_at(x, y), Ok(BORDER_ENERGY));
                }
            }
        }
    }
}

#[test]
fn energy_stays_consistent_through_mixed_removals() {
    let mut carver = SeamCarver::new(&test_card(17, 13)).unwrap();
    assert_energy_is_fresh(&carver);
    for round in 0..10 {
        if round % 3 == 2 {
            carver.remove_seam_across_height().unwrap();
        } else {
            carver.remove_seam_across_width().unwrap();
        }
        assert_energy_is_fresh(&carver);
    }
    assert_eq!((carver.width(), carver.height()), (10, 10));
}

#[test]
fn seams_have_the_right_length_and_are_connected() {
    let mut carver = SeamCarver::new(&test_card(12, 8)).unwrap();
    while carver.width() > 2 && carver.height() > 2 {
        let across_width = carver.find_seam_across_width();
        assert_eq!(across_width.len(), carver.height() as usize);
        assert!(across_width.iter().all(|&x| x < carver.width()));
        assert_connected(&across_width);

        let across_height = carver.find_seam_across_height();
        assert_eq!(across_height.len(), carver.width() as usize);
        assert!(across_height.iter().all(|&y| y < carver.height()));
        assert_connected(&across_height);

        carver.remove_seam_across_width().unwrap();
        carver.remove_seam_across_height().unwrap();
    }
}

#[test]
fn each_removal_shrinks_one_dimension_by_one() {
    let mut carver = SeamCarver::new(&test_card(6, 5)).unwrap();
    for expected in (1..6).rev() {
        carver.remove_seam_across_width().unwrap();
        assert_eq!((carver.width(), carver.height()), (expected, 5));
    }
    for expected in (1..5).rev() {
        carver.remove_seam_across_height().unwrap();
        assert_eq!((carver.width(), carver.height()), (1, expected));
    }
}

#[test]
fn exhausted_dimensions_fail_without_mutation() {
    let mut carver = SeamCarver::new(&test_card(1, 4)).unwrap();
    let before = carver.current_image();
    match carver.remove_seam_across_width() {
        Err(SeamError::InvalidSeam(_)) => {}
        other => panic!("expected InvalidSeam, got {:?}", other),
    }
    assert_eq!(carver.current_image(), before);
    assert_energy_is_fresh(&carver);

    let mut carver = SeamCarver::new(&test_card(4, 1)).unwrap();
    let before = carver.current_image();
    assert!(matches!(
        carver.remove_seam_across_height(),
        Err(SeamError::InvalidSeam(_))
    ));
    assert_eq!(carver.current_image(), before);
}

#[test]
fn seams_route_around_a_contrasting_strip() {
    // A uniform gray field with a one-pixel strip of changing colours
    // in column 1.  The strip and its neighbours are expensive; the
    // columns further right cost nothing.
    let strip = [
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
        [255, 255, 0],
        [0, 255, 255],
    ];
    let image = RgbImage::from_fn(6, 5, |x, y| {
        if x == 1 {
            Rgb(strip[y as usize])
        } else {
            Rgb([128, 128, 128])
        }
    });
    let mut carver = SeamCarver::new(&image).unwrap();

    let seam = carver.find_seam_across_width();
    assert_eq!(seam, vec![2, 3, 3, 3, 2]);
    assert!(seam[1..4].iter().all(|&x| x >= 3));

    carver.remove_seam_across_width().unwrap();
    let carved = carver.current_image();
    for y in 0..5 {
        assert_eq!(carved.get_pixel(1, y), &Rgb(strip[y as usize]));
    }
}

#[test]
fn out_of_range_energy_queries_fail() {
    let mut carver = SeamCarver::new(&test_card(4, 4)).unwrap();
    carver.remove_seam_across_width().unwrap();
    assert!(matches!(
        carver.energy_at(3, 0),
        Err(SeamError::OutOfRange { .. })
    ));
    assert!(carver.energy_at(2, 3).is_ok());
}

#[test]
fn a_full_rebuild_changes_nothing() {
    let mut carver = SeamCarver::new(&test_card(10, 10)).unwrap();
    carver.remove_seam_across_width().unwrap();
    let mut field = carver.energy().clone();
    field.rebuild_all(carver.pixels());
    assert_eq!(&field, carver.energy());
    field.rebuild_all(carver.pixels());
    assert_eq!(&field, carver.energy());
}
