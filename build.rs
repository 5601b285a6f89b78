use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const SAMPLE_RATE: u32 = 22_050;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR").unwrap();

    // Move cue: one short rising blip
    let move_cue = synthesize(&[(660.0, 0.035), (880.0, 0.045)]);
    write_wav(&Path::new(&out_dir).join("move.wav"), &move_cue);

    // Ending cue: descending C major triad
    let ending_cue = synthesize(&[(523.25, 0.18), (392.0, 0.18), (261.63, 0.36)]);
    write_wav(&Path::new(&out_dir).join("ending.wav"), &ending_cue);
}

/// Renders a sequence of (frequency Hz, duration s) sine tones as 16-bit PCM.
fn synthesize(notes: &[(f64, f64)]) -> Vec<i16> {
    let mut samples = Vec::new();
    for &(freq, secs) in notes {
        let count = (secs * SAMPLE_RATE as f64) as usize;
        // 5ms linear fade in/out so the speaker doesn't click
        let fade = (0.005 * SAMPLE_RATE as f64) as usize;
        for n in 0..count {
            let t = n as f64 / SAMPLE_RATE as f64;
            let envelope = if n < fade {
                n as f64 / fade as f64
            } else if n + fade > count {
                (count - n) as f64 / fade as f64
            } else {
                1.0
            };
            let value = (2.0 * std::f64::consts::PI * freq * t).sin() * envelope * 0.4;
            samples.push((value * i16::MAX as f64) as i16);
        }
    }
    samples
}

/// Writes mono 16-bit PCM as a canonical RIFF/WAVE file.
fn write_wav(path: &Path, samples: &[i16]) {
    let data_len = (samples.len() * 2) as u32;
    let byte_rate = SAMPLE_RATE * 2;

    let mut f = fs::File::create(path).unwrap();
    f.write_all(b"RIFF").unwrap();
    f.write_all(&(36 + data_len).to_le_bytes()).unwrap();
    f.write_all(b"WAVE").unwrap();

    f.write_all(b"fmt ").unwrap();
    f.write_all(&16u32.to_le_bytes()).unwrap(); // fmt chunk size
    f.write_all(&1u16.to_le_bytes()).unwrap(); // PCM
    f.write_all(&1u16.to_le_bytes()).unwrap(); // mono
    f.write_all(&SAMPLE_RATE.to_le_bytes()).unwrap();
    f.write_all(&byte_rate.to_le_bytes()).unwrap();
    f.write_all(&2u16.to_le_bytes()).unwrap(); // block align
    f.write_all(&16u16.to_le_bytes()).unwrap(); // bits per sample

    f.write_all(b"data").unwrap();
    f.write_all(&data_len.to_le_bytes()).unwrap();
    for s in samples {
        f.write_all(&s.to_le_bytes()).unwrap();
    }
}
