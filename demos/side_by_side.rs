//! Mirrored insert/delete/search session printing the comparison table.

use arborview::{ComparisonReport, Workbench};

fn main() -> anyhow::Result<()> {
    let mut bench = Workbench::new();

    for value in [50, 30, 70, 20, 40, 60, 80, 10, 90] {
        bench.insert(value);
    }
    bench.delete(30);

    let paths = bench.find_path(90);
    if let (Some(bst_path), Some(avl_path)) = (&paths.bst, &paths.avl) {
        println!(
            "path to 90: bst visits {} nodes, avl visits {}",
            bst_path.len(),
            avl_path.len()
        );
    }

    print!("{}", ComparisonReport::from_workbench(&bench));
    Ok(())
}
