// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use readme_badges::{BadgeContext, BadgeStyle, RepoCoordinates, build_badges, insert_badges};

fn sample_context() -> BadgeContext
{
    BadgeContext::new(RepoCoordinates::new("octocat", "hello-world",),)
        .with_commit(Some("0123abcd".to_owned(),),)
}

fn benchmark_build_badges(c: &mut Criterion,)
{
    let context = sample_context();
    let requested = [
        "build",
        "release",
        "license",
        "downloads",
        "stars",
        "forks",
        "issues",
        "unknown",
    ];

    c.bench_function("build_badges_eight", |b| {
        b.iter(|| build_badges(black_box(&requested,), &context, BadgeStyle::FlatSquare,),)
    },);
}

fn benchmark_insert_small(c: &mut Criterion,)
{
    let markup = build_badges(&["stars", "forks"], &sample_context(), BadgeStyle::Flat,);
    let readme = "# Project\n\nShort description.\n";

    c.bench_function("insert_badges_small", |b| {
        b.iter(|| insert_badges(black_box(readme,), &markup,).expect("insert failed",),)
    },);
}

fn benchmark_insert_large(c: &mut Criterion,)
{
    let markup = build_badges(&["stars", "forks", "license"], &sample_context(), BadgeStyle::Flat,);
    let mut readme = String::from("# Project *name*\n\n",);
    for i in 0..100 {
        readme.push_str(&format!(
            "## Section {i}\n\nParagraph with [a link](https://example.com/{i}) and `code`.\n\n- item\n- item\n\n"
        ),);
    }

    c.bench_function("insert_badges_100_sections", |b| {
        b.iter(|| insert_badges(black_box(&readme,), &markup,).expect("insert failed",),)
    },);
}

criterion_group!(benches, benchmark_build_badges, benchmark_insert_small, benchmark_insert_large);
criterion_main!(benches);
