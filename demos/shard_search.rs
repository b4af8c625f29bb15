//! Index five cities over three shards and run the three query kinds.
//!
//! Run with `RUST_LOG=debug cargo run --example shard_search`.

use geoshard::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let ctx = SpatialContext::new();
    let cities = [
        ("Bern", 7.45, 46.95),
        ("Zurich", 8.55, 47.37),
        ("Lausanne", 6.63, 46.52),
        ("Athens", 23.72, 37.97),
        ("Toronto", -79.4, 43.7),
    ];

    let mut searcher = ShardedSpatialSearcher::new(ShardSearchConfig::default(), ctx.clone())?;
    let mut shards: Vec<MemorySpatialIndex> = (0..3)
        .map(|i| MemorySpatialIndex::new(format!("shard-{i}")))
        .collect();
    for (i, (name, x, y)) in cities.iter().enumerate() {
        let doc = StoredDocument::builder()
            .add_text("name", *name)
            .add_double("x", *x)
            .add_double("y", *y)
            .build();
        shards[i % 3].add_point(ctx.point(*x, *y)?, doc)?;
    }
    for (shard_index, index) in shards.into_iter().enumerate() {
        searcher.add_shard(shard_index as i32, Box::new(index))?;
    }

    let bern = ctx.point(7.45, 46.95)?;
    let circle_wkt = ctx.circle(bern, ctx.degrees_from_km(300.0))?.to_wkt();
    let queries = [
        SpatialQuery::knn(bern, 5),
        SpatialQuery::circle(bern, 300.0, 5),
        SpatialQuery::shape(circle_wkt, 5),
    ];

    for query in &queries {
        println!("{}", query.description());
        let outcome = searcher.search(query)?;
        for result in outcome.results {
            println!("  {}", result.into_row().to_json()?);
        }
    }

    Ok(())
}
