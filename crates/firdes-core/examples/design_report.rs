//! Walk through the filter design toolkit and print a report
//!
//! Run with: cargo run --example design_report -p firdes-core
//!
//! Set RUST_LOG=debug to see the root-Nyquist search converge.

use firdes_core::{
    doppler_fading_taps, estimate_filter_len, filter_energy, filter_isi, kaiser_beta,
    kaiser_lowpass_taps, magnitude_response_db, RootNyquistSpec,
};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("FIR design report\n");

    // Size a lowpass from its stopband spec
    let atten_db = 60.0;
    let transition_bw = 0.1;
    let num_taps = estimate_filter_len(transition_bw, atten_db).expect("valid filter spec");
    let beta = kaiser_beta(atten_db);
    println!("Lowpass spec: {} dB stopband, {} transition bandwidth", atten_db, transition_bw);
    println!("       estimated taps = {}", num_taps);
    println!("       Kaiser beta    = {:.4}\n", beta);

    // Design it and check the response
    let cutoff = 0.25;
    let taps = kaiser_lowpass_taps(num_taps, cutoff, atten_db, 0.0).expect("valid lowpass design");
    println!("Designed {} taps, cutoff {} (energy {:.4})", taps.len(), cutoff, filter_energy(&taps));

    let response = magnitude_response_db(&taps, 512);
    let stopband_peak = response[128..256]
        .iter()
        .cloned()
        .fold(f32::NEG_INFINITY, f32::max);
    println!("       peak level past cutoff = {:.1} dB\n", stopband_peak);

    // Doppler fading filter for a Rice channel
    let doppler = doppler_fading_taps(41, 0.05, 2.0, 0.0).expect("valid fading design");
    println!("Doppler filter: 41 taps, fd = 0.05, K = 2");
    println!("       center tap = {:.4}, edge tap = {:.6}\n", doppler[20], doppler[0]);

    // Root-Nyquist pulse shaping: prototype vs optimized
    let k = 2;
    let delay = 6;
    let n = 2 * k * delay + 1;

    let proto = kaiser_lowpass_taps(n, 1.0 / k as f32, atten_db, 0.0).expect("valid prototype");
    let proto_isi = filter_isi(&proto, k, delay).expect("prototype ISI");

    let pulse = RootNyquistSpec::new(n, k, atten_db).design().expect("root-Nyquist design");
    let isi = filter_isi(&pulse, k, delay).expect("pulse ISI");

    println!("Root-Nyquist pulse: {} taps, {} samples/symbol, {} symbols delay", n, k, delay);
    println!("       prototype ISI  = {:.2} dB rms, {:.2} dB max", proto_isi.mse_db(), proto_isi.max_db());
    println!("       optimized ISI  = {:.2} dB rms, {:.2} dB max", isi.mse_db(), isi.max_db());
}
