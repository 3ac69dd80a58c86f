use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tactile_layout::{LineWriter, UnderlineState, Word};
use tactile_matrix::PinMatrix;

/// A paragraph's worth of words of one to seven cells.
fn sample_words() -> Vec<Word> {
    (0..400usize)
        .map(|index| {
            let cells = 1 + index % 7;
            (0..cells)
                .map(|offset| char::from_u32(0x2801 + ((index + offset) % 255) as u32).unwrap_or('⠿'))
                .collect()
        })
        .collect()
}

fn bench_word_wrap(criterion: &mut Criterion) {
    let words = sample_words();
    criterion.bench_function("wrap_400_words_width_120", |bencher| {
        bencher.iter(|| {
            let mut matrix = PinMatrix::new(120);
            let mut writer = LineWriter::new(0, 6, 120, 0, 5);
            for word in &words {
                writer.place_word(&mut matrix, word);
            }
            black_box(matrix.height())
        });
    });
    criterion.bench_function("wrap_400_words_dotted_underline", |bencher| {
        bencher.iter(|| {
            let mut matrix = PinMatrix::new(120);
            let mut writer = LineWriter::new(0, 0, 120, 0, 6)
                .with_underline(Some(UnderlineState::Dotted { last_was_dot: false }));
            for word in &words {
                writer.place_word(&mut matrix, word);
            }
            black_box(matrix.raised_count())
        });
    });
}

criterion_group!(wrap_benches, bench_word_wrap);
criterion_main!(wrap_benches);
