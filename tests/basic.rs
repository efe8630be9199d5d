use scanquant::{QuantizedColor, ReduceConfig, ReduceError};

fn qc(r: u8, g: u8, b: u8) -> QuantizedColor {
    QuantizedColor::new(r, g, b).unwrap()
}

fn px(r: u8, g: u8, b: u8) -> rgb::RGB<u8> {
    rgb::RGB { r, g, b }
}

#[test]
fn smoke_test_gradient() {
    let width = 32;
    let height = 16;
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            let b = 128u8;
            pixels.push(rgb::RGB { r, g, b });
        }
    }

    let config = ReduceConfig::default();
    let result = scanquant::reduce(&pixels, width, height, &config).unwrap();

    assert_eq!(result.bitmap().width(), width);
    assert_eq!(result.bitmap().height(), height);
    assert_eq!(result.indexed().indices().len(), width * height);
    assert_eq!(result.line_reports().len(), height);
    assert_eq!(result.palette().len(), result.destination_color_count());
    assert!(result.origin_color_count() >= result.destination_color_count());

    for &idx in result.indexed().indices() {
        assert!((idx as usize) < result.palette().len());
    }
}

#[test]
fn red_green_pair_is_flagged_when_it_cannot_merge() {
    // (255,0,0) -> 060000 and (0,255,0) -> 000600: neither sits one step
    // above the other, so a budget of one cannot be met.
    let pixels = [px(255, 0, 0), px(0, 255, 0)];
    let config = ReduceConfig::new().max_colors_per_line(1);
    let result = scanquant::reduce(&pixels, 2, 1, &config).unwrap();

    assert_eq!(result.bitmap().row(0), &[qc(6, 0, 0), qc(0, 6, 0)]);
    let incomplete: Vec<_> = result.incomplete_lines().collect();
    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].line, 0);
    assert_eq!(incomplete[0].colors_after, 2);
    assert_eq!(result.palette().entries(), &[qc(6, 0, 0), qc(0, 6, 0)]);
}

#[test]
fn adjacent_pair_collapses_to_first_seen() {
    // 40 -> 0 and 41 -> 1 with the default divider
    let pixels = [px(0, 0, 0), px(41, 0, 0)];
    let config = ReduceConfig::new().max_colors_per_line(1);
    let result = scanquant::reduce(&pixels, 2, 1, &config).unwrap();

    assert_eq!(result.bitmap().row(0), &[qc(0, 0, 0), qc(0, 0, 0)]);
    assert_eq!(result.incomplete_lines().count(), 0);
    assert_eq!(result.origin_color_count(), 2);
    assert_eq!(result.destination_color_count(), 1);
    assert_eq!(result.indexed().indices(), &[0, 0]);
}

#[test]
fn all_black_passes_through() {
    let pixels = vec![px(0, 0, 0); 16];
    let config = ReduceConfig::new().max_colors_per_line(256);
    let result = scanquant::reduce(&pixels, 4, 4, &config).unwrap();

    assert_eq!(result.origin_color_count(), 1);
    assert_eq!(result.destination_color_count(), 1);
    assert_eq!(result.palette().entries(), &[qc(0, 0, 0)]);
    assert!(result.indexed().indices().iter().all(|&i| i == 0));
    assert_eq!(result.reconstruct(), pixels);
}

#[test]
fn zero_dimensions_rejected() {
    let config = ReduceConfig::default();
    assert!(matches!(
        scanquant::reduce(&[], 0, 4, &config),
        Err(ReduceError::ZeroDimension)
    ));
    assert!(matches!(
        scanquant::reduce(&[], 4, 0, &config),
        Err(ReduceError::ZeroDimension)
    ));
}

#[test]
fn dimension_mismatch_rejected() {
    let pixels = vec![px(1, 2, 3); 5];
    let err = scanquant::reduce(&pixels, 2, 2, &ReduceConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ReduceError::DimensionMismatch {
            len: 5,
            width: 2,
            height: 2
        }
    ));
}

#[test]
fn invalid_config_rejected() {
    let pixels = vec![px(1, 2, 3); 4];
    let zero_budget = ReduceConfig::new().max_colors_per_line(0);
    assert!(matches!(
        scanquant::reduce(&pixels, 2, 2, &zero_budget),
        Err(ReduceError::InvalidMaxColorsPerLine(0))
    ));

    let small_divider = ReduceConfig::new().divider(8.0);
    assert!(matches!(
        scanquant::reduce(&pixels, 2, 2, &small_divider),
        Err(ReduceError::InvalidDivider(_))
    ));

    let no_iterations = ReduceConfig::new().max_iterations(0);
    assert!(matches!(
        scanquant::reduce(&pixels, 2, 2, &no_iterations),
        Err(ReduceError::InvalidMaxIterations)
    ));
}

#[test]
fn error_messages_are_readable() {
    let err = ReduceError::PaletteMiss {
        x: 3,
        y: 7,
        color: qc(1, 2, 3),
    };
    assert_eq!(err.to_string(), "color 010203 at (3, 7) has no palette entry");
    assert_eq!(
        ReduceError::IndexOutOfByteRange { index: 300 }.to_string(),
        "palette index 300 does not fit in a byte"
    );
}

#[test]
fn config_defaults() {
    let config = ReduceConfig::default();
    assert_eq!(config.max_colors_per_line, 128);
    assert_eq!(config.divider, scanquant::DEFAULT_DIVIDER);
    assert_eq!(config.max_iterations, 4096);
}

#[test]
fn single_pixel() {
    let result =
        scanquant::reduce(&[px(200, 100, 50)], 1, 1, &ReduceConfig::default()).unwrap();
    assert_eq!(result.palette().entries(), &[qc(4, 2, 1)]);
    assert_eq!(result.reconstruct(), vec![px(161, 80, 40)]);
}
