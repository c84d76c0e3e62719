use std::collections::BTreeMap;
use std::path::Path;

use pretty_assertions::assert_eq;
use rr_wad::{error::Result, Locator, Member, Wad};
use tracing::info;
use tracing_test::traced_test;
use walkdir::WalkDir;

fn member_with_data(name: &str, version: u32, data: &[u8]) -> Member {
    let mut member = Member::new(name, version);
    member.set_data(data.to_vec());
    member
}

/// Collect every file under `root` as relative-path -> contents.
fn snapshot_tree(root: &Path) -> Result<BTreeMap<String, Vec<u8>>> {
    let mut tree = BTreeMap::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_dir() {
            continue;
        }
        let name = entry
            .path()
            .strip_prefix(root)
            .expect("walked entries live under the walked root")
            .to_string_lossy()
            .into_owned();
        tree.insert(name, std::fs::read(entry.path())?);
    }
    Ok(tree)
}

#[traced_test]
#[test]
fn save_load_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let wad_path = dir.path().join("assets.wad");

    let entries: Vec<(&str, u32, &[u8])> = vec![
        ("readme.txt", 1, b"Hello World"),
        ("sounds\\drill.snd", 7, b"whirr whirr"),
        ("levels\\level01.map", 3, b""),
        ("Levels\\level02.map", 3, b"rock and more rock"),
    ];

    let mut wad = Wad::new();
    for (name, version, data) in &entries {
        wad.add(member_with_data(name, *version, data));
    }
    wad.save(&wad_path)?;

    let mut loaded = Wad::load(&wad_path)?;
    assert_eq!(loaded.len(), entries.len());

    for (name, version, data) in &entries {
        info!("checking {}", name);
        let member = loaded.get(name)?;
        assert!(!member.is_loaded());
        assert_eq!(member.version(), *version);

        let member = loaded.get_mut(name)?;
        assert_eq!(member.data()?, *data);
    }

    Ok(())
}

#[test]
fn offset_table_is_contiguous_and_correct() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let wad_path = dir.path().join("assets.wad");

    let mut wad = Wad::new();
    wad.add(member_with_data("b.bin", 1, b"bravo"));
    wad.add(member_with_data("a.bin", 1, b"alpha alpha"));
    wad.add(member_with_data("c.bin", 1, b"charlie!"));
    wad.save(&wad_path)?;

    let raw = std::fs::read(&wad_path)?;
    let loaded = Wad::load(&wad_path)?;

    // Sorted layout means ranges appear in name order, back to back.
    let mut expected_next = None;
    for (name, data) in [
        ("a.bin", b"alpha alpha" as &[u8]),
        ("b.bin", b"bravo"),
        ("c.bin", b"charlie!"),
    ] {
        let member = loaded.get(name)?;
        let Some(&Locator::Wad { offset, size, .. }) = member.locator() else {
            panic!("loaded member should be archive backed");
        };

        let start = offset as usize;
        let end = start + size as usize;
        assert_eq!(&raw[start..end], data);

        if let Some(next) = expected_next {
            assert_eq!(offset, next);
        }
        expected_next = Some(offset + size);
    }
    assert_eq!(expected_next, Some(raw.len() as u32));

    Ok(())
}

#[traced_test]
#[test]
fn directory_round_trip() -> Result<()> {
    let source = tempfile::tempdir()?;
    std::fs::create_dir_all(source.path().join("sounds"))?;
    std::fs::create_dir_all(source.path().join("levels/tutorial"))?;
    std::fs::write(source.path().join("readme.txt"), b"Hello World")?;
    std::fs::write(source.path().join("sounds/drill.snd"), b"whirr whirr")?;
    std::fs::write(source.path().join("levels/tutorial/one.map"), b"rock")?;
    std::fs::write(source.path().join("levels/tutorial/two.map"), b"")?;

    let work = tempfile::tempdir()?;
    let wad_path = work.path().join("assets.wad");

    let mut wad = Wad::from_directory(source.path())?;
    assert_eq!(wad.len(), 4);
    wad.save(&wad_path)?;

    let target = tempfile::tempdir()?;
    let mut loaded = Wad::load(&wad_path)?;
    loaded.extract(target.path())?;

    // Every member was released as soon as it was written out.
    let names: Vec<String> = loaded.file_names().map(str::to_owned).collect();
    for name in names {
        assert!(!loaded.get(&name)?.is_loaded());
    }

    assert_eq!(snapshot_tree(source.path())?, snapshot_tree(target.path())?);

    Ok(())
}

#[traced_test]
#[test]
fn extract_normalizes_backslash_names() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let wad_path = dir.path().join("assets.wad");

    // Archives produced by the game carry `\` separated names.
    let mut wad = Wad::new();
    wad.add(member_with_data("sounds\\drill.snd", 1, b"whirr"));
    wad.add(member_with_data("levels\\tutorial\\one.map", 1, b"rock"));
    wad.save(&wad_path)?;

    let target = tempfile::tempdir()?;
    let mut loaded = Wad::load(&wad_path)?;
    loaded.extract(target.path())?;

    assert_eq!(
        std::fs::read(target.path().join("sounds/drill.snd"))?,
        b"whirr"
    );
    assert_eq!(
        std::fs::read(target.path().join("levels/tutorial/one.map"))?,
        b"rock"
    );

    Ok(())
}

#[test]
fn extract_into_missing_directory_fails_before_writing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let wad_path = dir.path().join("assets.wad");

    let mut wad = Wad::new();
    wad.add(member_with_data("readme.txt", 1, b"Hello World"));
    wad.save(&wad_path)?;

    let mut loaded = Wad::load(&wad_path)?;
    let missing = dir.path().join("not-there");
    assert!(loaded.extract(&missing).is_err());
    assert!(!missing.exists());

    Ok(())
}

#[test]
fn lazily_backed_members_survive_unload_cycles() -> Result<()> {
    let source = tempfile::tempdir()?;
    std::fs::write(source.path().join("readme.txt"), b"Hello World")?;

    let mut wad = Wad::from_directory(source.path())?;
    let member = wad.get_mut("readme.txt")?;

    assert_eq!(member.data()?, b"Hello World");
    member.unload();
    assert_eq!(member.data()?, b"Hello World");

    Ok(())
}
