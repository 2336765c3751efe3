use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use maze::algorithms::Searcher;
use maze::generators::Generator;
use maze::problem::MazeProblem;

const SIZE: usize = 25;
const INSTANCES: u64 = 3;

fn compare_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Maze search");

    for generator in [Generator::Dfs, Generator::Kruskal, Generator::Divide] {
        for i in 0..INSTANCES {
            let mut rng = ChaCha8Rng::seed_from_u64(i);
            let Ok(maze) = generator.generate(SIZE, SIZE, &mut rng) else {
                continue;
            };
            let problem = MazeProblem::corners(maze);
            let instance_name = format!("{generator}[{SIZE}x{SIZE}]:{i}");

            for searcher in Searcher::ALL {
                if let Ok(Some(result)) = problem.solve(searcher, &mut rng) {
                    println!(
                        "{searcher} on {instance_name}: {} steps, {} records",
                        result.len(),
                        result.records.len()
                    );
                }
                group.bench_with_input(
                    BenchmarkId::new(searcher.to_string(), &instance_name),
                    &problem,
                    |b, p| b.iter(|| p.solve(searcher, &mut rng)),
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, compare_search);
criterion_main!(benches);
