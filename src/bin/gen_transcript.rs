//! Synthetic WhatsApp transcript generator for stress testing chatlens.
//!
//! Usage: cargo run --features gen-test --bin gen_transcript -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_transcript -- 100000 heavy_chat.txt

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use rand::Rng;
use rand::seq::SliceRandom;

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carla Gómez",
    "Diego",
    "Мария",
    "村上",
    "+34 600 123 456",
    "🔥Fire🔥",
];

const PHRASES: &[&str] = &[
    "Hola a todos",
    "¿Quedamos mañana para el partido?",
    "jajaja",
    "Perfecto, nos vemos allí",
    "see you at 5 p.m.",
    "note: 10:30 works for me",
    "Ok",
    "Gracias por todo, de verdad",
    "Привет мир!",
    "こんにちは 🌍",
];

const MEDIA: &[&str] = &[
    "imagen omitida",
    "video omitido",
    "audio omitido",
    "documento omitido",
    "image omitted",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");

    println!("Transcript generator");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    let file = File::create(output).expect("Failed to create output file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    let mut ts = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid start date");

    let notice = format!(
        "{} {}: Los mensajes y las llamadas están cifrados de extremo a extremo.\n",
        header(ts, false),
        SENDERS[0]
    );
    writer.write_all(notice.as_bytes()).unwrap();
    bytes_written += notice.len();

    for i in 0..count {
        // Mostly short replies, with the occasional long silence
        let step = if rng.gen_ratio(1, 50) {
            rng.gen_range(3_600..172_800)
        } else {
            rng.gen_range(5..900)
        };
        ts += Duration::seconds(step);

        let sender = SENDERS.choose(&mut rng).unwrap();
        let line = format!(
            "{} {}: {}\n",
            header(ts, i % 3 == 0),
            sender,
            generate_content(&mut rng, i)
        );
        bytes_written += line.len();
        writer.write_all(line.as_bytes()).unwrap();

        // Occasionally insert garbage lines to test robustness
        if i % 1000 == 500 {
            let garbage = generate_garbage_line(&mut rng);
            writer.write_all(garbage.as_bytes()).unwrap();
            bytes_written += garbage.len();
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush().unwrap();

    let elapsed = start.elapsed();
    println!("\n\nDone!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
}

/// Message header in either 24-hour or Spanish 12-hour style.
fn header(ts: NaiveDateTime, twelve_hour: bool) -> String {
    let date = ts.format("%-d/%-m/%y");
    if twelve_hour {
        let (pm, hour) = ts.hour12();
        let marker = if pm { "p. m." } else { "a. m." };
        format!(
            "[{}, {}:{:02}:{:02}\u{202F}{}]",
            date,
            hour,
            ts.minute(),
            ts.second(),
            marker
        )
    } else {
        format!("[{}, {}]", date, ts.format("%H:%M:%S"))
    }
}

fn generate_content(rng: &mut impl Rng, index: usize) -> String {
    match index % 25 {
        0..=14 => (*PHRASES.choose(rng).unwrap()).to_string(),
        15..=18 => {
            let words = rng.gen_range(5..60);
            (0..words)
                .map(|_| *PHRASES.choose(rng).unwrap())
                .collect::<Vec<_>>()
                .join(" ")
        }
        19 | 20 => (*MEDIA.choose(rng).unwrap()).to_string(),
        21 => "<Multimedia omitido>".to_string(),
        22 => format!("Mensaje con: dos puntos #{}", index),
        23 => "   ".to_string(),
        _ => format!("Mensaje normal #{}", index),
    }
}

fn generate_garbage_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..5) {
        0 => "This line has no timestamp or sender format\n".to_string(),
        1 => "[31/2/24, 09:00:00] Nobody: impossible date\n".to_string(),
        2 => "15.01.24, 10:30 - Alice: android style header\n".to_string(),
        3 => "\n".to_string(),
        _ => "continuation of the previous message\n".to_string(),
    }
}
