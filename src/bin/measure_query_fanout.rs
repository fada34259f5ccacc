use foliage_index::prelude::*;

use rand::Rng;

fn main() {
    let args: Vec<_> = std::env::args().collect();
    let count: usize = args.get(1).map_or(100_000, |a| a.parse().unwrap());
    let chunk_size: f32 = args.get(2).map_or(40.0, |a| a.parse().unwrap());
    let radius: f32 = args.get(3).map_or(5.0, |a| a.parse().unwrap());

    println!(
        "Scattering {} points over [-500, 500]^3 with chunk size {}",
        count, chunk_size
    );

    let config = ChunkGridConfig::with_chunk_size(chunk_size);
    let mut grid = ChunkGrid::new(config).unwrap();
    let mut rng = rand::thread_rng();
    for i in 0..count {
        let p = PointN([
            rng.gen_range(-500.0..500.0),
            rng.gen_range(-500.0..500.0),
            rng.gen_range(-500.0..500.0),
        ]);
        grid.insert(p, i);
    }

    let mut num_nodes = 0;
    let mut num_leaves = 0;
    let mut max_depth = 0;
    for (_key, octree) in grid.iter_chunks() {
        let root_half_extent = octree.root().half_extent();
        octree.visit(&mut |node: &OctreeNode<usize>| {
            num_nodes += 1;
            if node.is_leaf() {
                num_leaves += 1;
                let depth = (root_half_extent / node.half_extent()).log2().round() as u32;
                max_depth = max_depth.max(depth);
            }
            VisitStatus::Continue
        });
    }

    println!(
        "chunks = {}, nodes = {}, leaves = {}, max depth = {}",
        grid.num_chunks(),
        num_nodes,
        num_leaves,
        max_depth
    );

    let num_queries = 1000;
    let mut total_found = 0;
    let start = std::time::Instant::now();
    for _ in 0..num_queries {
        let center = PointN([
            rng.gen_range(-500.0..500.0),
            rng.gen_range(-500.0..500.0),
            rng.gen_range(-500.0..500.0),
        ]);
        total_found += grid.query_radius(center, radius).len();
    }
    let elapsed = start.elapsed();

    println!(
        "{} radius {} queries: {:.1} found on average, {:?} per query",
        num_queries,
        radius,
        total_found as f32 / num_queries as f32,
        elapsed / num_queries
    );
}
