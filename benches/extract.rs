// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use dtek_scrape::config::FACT_MARKER;
use dtek_scrape::core::extract::extract_object;

/// Synthetic shutdowns page: the fact object buried mid-document between
/// realistic amounts of markup, sized like the live page.
fn synthetic_page() -> String {
    let mut body = String::with_capacity(256 * 1024);
    for i in 0..1500 {
        body.push_str(&format!("<div class=\"row r{}\">page furniture</div>\n", i));
    }

    body.push_str("<script>DisconSchedule.fact = {\"update\":\"12:00\",\"data\":{");
    for stamp in 0..4 {
        if stamp > 0 {
            body.push(',');
        }
        body.push_str(&format!("\"17000{}0000\":{{", stamp));
        for feeder in 1..=6 {
            for queue in 1..=2 {
                if !(feeder == 1 && queue == 1) {
                    body.push(',');
                }
                body.push_str(&format!("\"GPV{}.{}\":{{", feeder, queue));
                for hour in 1..=24 {
                    if hour > 1 {
                        body.push(',');
                    }
                    body.push_str(&format!("\"{}\":\"yes\"", hour));
                }
                body.push('}');
            }
        }
        body.push('}');
    }
    body.push_str("}};</script>\n");

    for i in 0..1500 {
        body.push_str(&format!("<p>tail {}</p>\n", i));
    }
    body
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_page();

    c.bench_function("extract_fact", |b| {
        b.iter(|| {
            let block = extract_object(black_box(&doc), FACT_MARKER).unwrap();
            black_box(block.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
