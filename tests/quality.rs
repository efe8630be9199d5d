use scanquant::{DEFAULT_DIVIDER, ReduceConfig};

fn gradient_image(width: usize, height: usize) -> Vec<rgb::RGB<u8>> {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = ((x + y) * 128 / (width + height).max(1)) as u8;
            pixels.push(rgb::RGB { r, g, b });
        }
    }
    pixels
}

fn noisy_image(width: usize, height: usize) -> Vec<rgb::RGB<u8>> {
    // Pseudo-random noise via simple hash
    let mut pixels = Vec::with_capacity(width * height);
    for i in 0..(width * height) {
        let h = ((i as u32).wrapping_mul(2654435761)) as u8; // Knuth's multiplicative hash
        pixels.push(rgb::RGB {
            r: h,
            g: h.wrapping_add(50),
            b: h.wrapping_add(100),
        });
    }
    pixels
}

fn channels(p: rgb::RGB<u8>) -> [u8; 3] {
    [p.r, p.g, p.b]
}

#[test]
fn unreduced_reconstruction_error_is_below_one_step() {
    let (w, h) = (64, 64);
    let pixels = gradient_image(w, h);
    let result = scanquant::reduce(&pixels, w, h, &ReduceConfig::default()).unwrap();
    assert!(result.line_reports().iter().all(|r| r.merges == 0));

    let reconstructed = result.reconstruct();
    assert_eq!(reconstructed.len(), pixels.len());
    for (orig, recon) in pixels.iter().zip(&reconstructed) {
        for (o, r) in channels(*orig).into_iter().zip(channels(*recon)) {
            assert!(r <= o, "reconstruction overshoots: {orig:?} -> {recon:?}");
            assert!(
                ((o - r) as f64) < DEFAULT_DIVIDER + 1.0,
                "error above one step: {orig:?} -> {recon:?}"
            );
        }
    }
}

#[test]
fn merges_only_move_channels_down() {
    let (w, h) = (64, 32);
    let pixels = noisy_image(w, h);
    let config = ReduceConfig::new().max_colors_per_line(4);
    let result = scanquant::reduce(&pixels, w, h, &config).unwrap();
    assert!(result.line_reports().iter().any(|r| r.merges > 0));

    for (orig, recon) in pixels.iter().zip(result.reconstruct()) {
        for (o, r) in channels(*orig).into_iter().zip(channels(recon)) {
            assert!(r <= o, "merge moved a channel up: {orig:?} -> {recon:?}");
        }
    }
}

#[test]
fn exact_divider_reduction_is_stable() {
    // With divider 16 reconstruction is exact, so reducing the output again
    // reproduces the same palette and indices.
    let (w, h) = (48, 16);
    let pixels = noisy_image(w, h);
    let config = ReduceConfig::new().divider(16.0).max_colors_per_line(256);
    let first = scanquant::reduce(&pixels, w, h, &config).unwrap();
    let second = scanquant::reduce(&first.reconstruct(), w, h, &config).unwrap();

    assert_eq!(first.palette().entries(), second.palette().entries());
    assert_eq!(first.indexed(), second.indexed());
    assert_eq!(first.reconstruct(), second.reconstruct());
}

#[test]
fn tighter_budget_never_grows_palette() {
    let (w, h) = (64, 32);
    let pixels = noisy_image(w, h);
    let mut previous = usize::MAX;
    for budget in [256, 64, 16, 4, 1] {
        let config = ReduceConfig::new().max_colors_per_line(budget);
        let result = scanquant::reduce(&pixels, w, h, &config).unwrap();
        let len = result.palette().len();
        assert!(len <= previous, "budget {budget}: {len} > {previous}");
        previous = len;
    }
}
