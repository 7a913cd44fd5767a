use image::{Rgb, RgbImage, Rgba, RgbaImage};

use watermark_overlay::{
    apply_watermark, check_dimensions, parse_position, BlendConfig, Error, Placement,
    PlacementPlan, SourceImage, TransparencyRule,
};

fn solid(width: u32, height: u32, color: [u8; 3]) -> SourceImage {
    SourceImage::Opaque(RgbImage::from_pixel(width, height, Rgb(color)))
}

#[test]
fn single_placement_midweight_scenario() {
    // 4x4 black base, 2x2 white watermark at (1,1), weight 50:
    // the covered window becomes (127,127,127), everything else stays black.
    let base = solid(4, 4, [0, 0, 0]);
    let wm = solid(2, 2, [255, 255, 255]);
    let plan = PlacementPlan::new(Placement::Single { x: 1, y: 1 }, 2, 2);
    let config = BlendConfig::new(TransparencyRule::Opaque, 50);

    let out = apply_watermark(&base, &wm, &plan, &config);

    assert_eq!(*out.get_pixel(1, 1), Rgb([127, 127, 127]));
    assert_eq!(*out.get_pixel(2, 2), Rgb([127, 127, 127]));
    for (x, y, px) in out.enumerate_pixels() {
        if !(1..3).contains(&x) || !(1..3).contains(&y) {
            assert_eq!(*px, Rgb([0, 0, 0]), "pixel outside the window at ({x}, {y})");
        }
    }
}

#[test]
fn grid_placement_full_weight_overrides_every_pixel() {
    let base = solid(4, 4, [0, 0, 0]);
    let wm = solid(2, 2, [255, 255, 255]);
    let plan = PlacementPlan::new(Placement::Grid, 2, 2);
    let config = BlendConfig::new(TransparencyRule::Opaque, 100);

    let out = apply_watermark(&base, &wm, &plan, &config);
    assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])));
}

#[test]
fn grid_wraps_seamlessly_on_non_divisible_dimensions() {
    // 3x1 watermark on a 7x1 base: pattern repeats a b c a b c a
    let mut wm = RgbImage::new(3, 1);
    wm.put_pixel(0, 0, Rgb([10, 0, 0]));
    wm.put_pixel(1, 0, Rgb([20, 0, 0]));
    wm.put_pixel(2, 0, Rgb([30, 0, 0]));
    let wm = SourceImage::Opaque(wm);
    let base = solid(7, 1, [0, 0, 0]);
    let plan = PlacementPlan::new(Placement::Grid, 3, 1);
    let config = BlendConfig::new(TransparencyRule::Opaque, 100);

    let out = apply_watermark(&base, &wm, &plan, &config);
    let reds: Vec<u8> = out.pixels().map(|p| p[0]).collect();
    assert_eq!(reds, vec![10, 20, 30, 10, 20, 30, 10]);
}

#[test]
fn weight_zero_leaves_the_base_untouched() {
    let base = solid(3, 3, [42, 84, 126]);
    let wm = solid(3, 3, [255, 255, 255]);
    let plan = PlacementPlan::new(Placement::Grid, 3, 3);
    let config = BlendConfig::new(TransparencyRule::Opaque, 0);

    let out = apply_watermark(&base, &wm, &plan, &config);
    assert!(out.pixels().all(|p| *p == Rgb([42, 84, 126])));
}

#[test]
fn chroma_key_watermark_pixels_never_blend() {
    let key = Rgb([0, 255, 0]);
    let wm = SourceImage::Opaque(RgbImage::from_pixel(2, 2, key));
    let base = solid(4, 4, [50, 60, 70]);
    let plan = PlacementPlan::new(Placement::Grid, 2, 2);
    let config = BlendConfig::new(TransparencyRule::ChromaKey(key), 100);

    let out = apply_watermark(&base, &wm, &plan, &config);
    assert!(out.pixels().all(|p| *p == Rgb([50, 60, 70])));
}

#[test]
fn partial_alpha_passes_through_at_any_weight() {
    let wm = SourceImage::Translucent(RgbaImage::from_pixel(
        2,
        2,
        Rgba([255, 255, 255, 128]),
    ));
    let base = solid(2, 2, [10, 10, 10]);
    let plan = PlacementPlan::new(Placement::Single { x: 0, y: 0 }, 2, 2);

    for weight in [0, 50, 100] {
        let config = BlendConfig::new(TransparencyRule::AlphaBinary, weight);
        let out = apply_watermark(&base, &wm, &plan, &config);
        assert!(out.pixels().all(|p| *p == Rgb([10, 10, 10])));
    }
}

#[test]
fn fully_opaque_alpha_blends_rgb_only() {
    let wm = SourceImage::Translucent(RgbaImage::from_pixel(
        2,
        2,
        Rgba([200, 100, 0, 255]),
    ));
    let base = solid(2, 2, [0, 0, 0]);
    let plan = PlacementPlan::new(Placement::Single { x: 0, y: 0 }, 2, 2);
    let config = BlendConfig::new(TransparencyRule::AlphaBinary, 100);

    let out = apply_watermark(&base, &wm, &plan, &config);
    assert!(out.pixels().all(|p| *p == Rgb([200, 100, 0])));
}

#[test]
fn oversized_watermark_is_rejected_before_any_other_parameter() {
    let base = solid(4, 4, [0, 0, 0]);
    let wm = solid(5, 2, [0, 0, 0]);
    assert!(matches!(
        check_dimensions(&base, &wm),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn out_of_range_position_aborts_the_run() {
    // base 4x4, watermark 2x2: valid range is x in [0,2], y in [0,2]
    assert!(matches!(
        parse_position("5 5", 2, 2),
        Err(Error::OutOfRange("position"))
    ));
}
