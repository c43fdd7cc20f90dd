use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hyperbolic_core::{Config, DrawList, Renderer};

fn bench_render(c: &mut Criterion) {
    let mut renderer = Renderer::new(Config::default(), 1280.0, 720.0).expect("renderer");
    let mut list = DrawList::new();

    c.bench_function("render_frame_tick", |b| {
        b.iter(|| {
            list.clear();
            black_box(renderer.tick(&mut list));
        })
    });

    c.bench_function("render_frame_same_frame", |b| {
        b.iter(|| {
            list.clear();
            black_box(renderer.render(&mut list));
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
