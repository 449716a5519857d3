// benches/collect.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use grant_finder::collect::{ collect_grant_ids, NoDelay, WorksSource };
use grant_finder::openalex::{ FetchError, GrantEntry, Work, WorksPage };
use grant_finder::progress::NullProgress;

const FUNDER: &str = "Wellcome Trust";

/// 50 pages of 100 works, each with a matching and a co-funder entry.
/// Ids repeat every 700 works so dedup has something to do.
struct Synthetic {
    pages: usize,
}

impl WorksSource for Synthetic {
    fn works_page(&mut self, _funder_id: &str, cursor: &str) -> Result<WorksPage, FetchError> {
        let n: usize = if cursor == "*" { 0 } else { cursor.parse().unwrap_or(0) };
        let items = (0..100)
            .map(|i| {
                let k = (n * 100 + i) % 700;
                Work {
                    grants: vec![
                        GrantEntry::new(&format!("{k:06}/Z/20/Z"), FUNDER),
                        GrantEntry::new(&format!("MR/{k:06}/1"), "Medical Research Council"),
                    ],
                }
            })
            .collect();
        let next = n + 1;
        Ok(WorksPage {
            items,
            next_cursor: (next < self.pages).then(|| next.to_string()),
            total: (self.pages * 100) as u64,
        })
    }
}

fn bench_collect(c: &mut Criterion) {
    c.bench_function("collect_50_pages", |b| {
        b.iter(|| {
            let mut src = Synthetic { pages: 50 };
            let ids = collect_grant_ids(&mut src, &mut NoDelay, "F1", black_box(FUNDER), Some(&mut NullProgress));
            black_box(ids.map(|ids| ids.len()).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_collect);
criterion_main!(benches);
