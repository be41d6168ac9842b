use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// A level's grid and its metadata file, sharing one stem.
struct LevelFiles {
    stem: String,
    csv: PathBuf,
    json: PathBuf,
}

fn main() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let levels = find_levels(&manifest_dir.join("../levels"));
    let table = level_table(&levels);

    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("levels.rs");
    if fs::read_to_string(&dest).ok().as_deref() != Some(table.as_str()) {
        fs::write(&dest, table).expect("failed to write level table");
    }
}

/// Every `*.csv` under `dir` paired with its `.json`, in play order (file name order).
fn find_levels(dir: &Path) -> Vec<LevelFiles> {
    println!("cargo:rerun-if-changed={}", dir.display());

    let mut levels: Vec<LevelFiles> = fs::read_dir(dir)
        .into_iter()
        .flatten()
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
        .filter_map(|csv| {
            let stem = csv.file_stem()?.to_str()?.to_string();
            let json = csv.with_extension("json");
            assert!(json.exists(), "Level {stem} has no metadata file");
            Some(LevelFiles { stem, csv, json })
        })
        .collect();
    levels.sort_by(|a, b| a.stem.cmp(&b.stem));

    for level in &levels {
        println!("cargo:rerun-if-changed={}", level.csv.display());
        println!("cargo:rerun-if-changed={}", level.json.display());
    }
    levels
}

fn level_table(levels: &[LevelFiles]) -> String {
    let mut code = String::from("pub(crate) static LEVEL_DATA: &[(&str, &str, &str)] = &[\n");
    for level in levels {
        writeln!(
            code,
            "    ({:?}, include_str!({:?}), include_str!({:?})),",
            level.stem,
            level.csv.display().to_string(),
            level.json.display().to_string(),
        )
        .expect("writing to a String cannot fail");
    }
    code.push_str("];\n");
    code
}
