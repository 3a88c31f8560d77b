use bitsqueeze::codec::{nf4, q4_0, q8_0};
use bitsqueeze::{compress_1d, compress_2d, decompress, load, metrics, Method};

#[test]
fn bf16_round_trips_integers_exactly() {
    let src: Vec<f32> = (-8..8).map(|i| i as f32).collect();
    let payload = compress_1d(&src, Method::Bf16).unwrap();
    let env = load(&payload).unwrap();
    let mut dst = vec![0.0f32; src.len()];
    decompress(&env, &mut dst).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn q8_0_keeps_a_flat_ramp_within_one_code() {
    let src: Vec<f32> = (0..32).map(|i| i as f32 - 16.0).collect();
    let payload = q8_0::compress(&src).unwrap();
    let mut dst = vec![0.0f32; src.len()];
    q8_0::decompress(&payload, &mut dst).unwrap();
    let m = metrics::measure(&src, &dst).unwrap();
    assert!(m.max_abs < 0.2, "max_abs={}", m.max_abs);
}

#[test]
fn nf4_reproduces_its_own_codebook_constants_exactly() {
    let src = nf4::LEVELS.to_vec();
    let payload = nf4::compress(&src).unwrap();
    let mut dst = vec![0.0f32; src.len()];
    nf4::decompress(&payload, &mut dst).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn q4_0_saturates_out_of_range_values_to_the_block_extreme() {
    let mut src = vec![0.0f32; 32];
    src[0] = 100.0;
    src[1] = -100.0;
    let payload = q4_0::compress(&src).unwrap();
    let mut dst = vec![0.0f32; src.len()];
    q4_0::decompress(&payload, &mut dst).unwrap();
    assert!(dst[0] > 0.0);
    assert!(dst[1] < 0.0);
    for v in &dst[2..] {
        assert_eq!(*v, 0.0);
    }
}

#[test]
fn topk_preserves_the_largest_magnitude_entries_per_row() {
    let src = vec![
        0.1f32, -9.0, 0.2, 4.0, 0.0, -0.3, 0.4, -0.5,
        1.0, 2.0, 3.0, -8.0, 0.0, 0.0, 0.0, 0.0,
    ];
    let payload = compress_2d(&src, 2, 8, Method::Topk, 0.25).unwrap();
    let env = load(&payload).unwrap();
    let mut dst = vec![0.0f32; src.len()];
    decompress(&env, &mut dst).unwrap();
    assert_eq!(dst[1], -9.0);
    assert_eq!(dst[3], 4.0);
    assert_eq!(dst[11], -8.0);
}

#[test]
fn envelope_round_trip_preserves_shape_metadata() {
    let src: Vec<f32> = (0..64).map(|i| (i as f32) * 0.25 - 8.0).collect();
    let payload = compress_1d(&src, Method::Fp16).unwrap();
    let env = load(&payload).unwrap();
    assert_eq!(env.header.num_elements as usize, src.len());
    assert_eq!(env.header.method, Method::Fp16 as i32);
}

#[test]
fn larger_tensor_quantized_with_q2_k_stays_within_a_loose_error_bound() {
    let src: Vec<f32> = (0..1024).map(|i| ((i as f32) * 0.013).sin() * 3.0).collect();
    let payload = compress_1d(&src, Method::Q2_K).unwrap();
    let env = load(&payload).unwrap();
    let mut dst = vec![0.0f32; src.len()];
    decompress(&env, &mut dst).unwrap();
    let m = metrics::measure(&src, &dst).unwrap();
    assert!(m.mae < 0.5, "mae={}", m.mae);
}
