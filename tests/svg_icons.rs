#![cfg(feature = "svg")]

use std::fs;

use iconsmith::raster::SvgBackend;
use iconsmith::{generate_icons, resolve_backend, Capability, Error, IconConfig};
use resvg::tiny_skia::Pixmap;

const ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 128 128">
  <rect width="128" height="128" rx="24" fill="#5a7fb8"/>
  <circle cx="64" cy="64" r="40" fill="#ffffff"/>
</svg>"##;

#[test]
fn rasterizes_every_size_next_to_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let svg = dir.path().join("icon.svg");
    fs::write(&svg, ICON).unwrap();

    let cfg = IconConfig {
        svg_path: svg.clone(),
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let backend = resolve_backend(&[Capability::Svg], &cfg).expect("svg backend");
    let mut reported = Vec::new();
    generate_icons(backend.as_ref(), &cfg, |icon| reported.push(icon.size)).unwrap();
    assert_eq!(reported, vec![16, 48, 128]);

    for size in [16u32, 48, 128] {
        let pixmap = Pixmap::load_png(dir.path().join(format!("icon{}.png", size))).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (size, size));
        let center = pixmap.pixel(size / 2, size / 2).unwrap();
        assert_eq!((center.red(), center.green(), center.blue()), (255, 255, 255));
    }
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = IconConfig {
        svg_path: dir.path().join("icon.svg"),
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let err = resolve_backend(&[Capability::Svg], &cfg).err().unwrap();
    assert!(matches!(err, Error::MissingInput(ref p) if p == &cfg.svg_path));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unwritable_output_reports_the_failing_size() {
    let dir = tempfile::tempdir().unwrap();
    let svg = dir.path().join("icon.svg");
    fs::write(&svg, ICON).unwrap();
    // A directory squatting on the first output path makes that write fail.
    fs::create_dir(dir.path().join("icon16.png")).unwrap();

    let cfg = IconConfig {
        svg_path: svg.clone(),
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let backend = SvgBackend::open(&svg).unwrap();
    match generate_icons(&backend, &cfg, |_| {}) {
        Err(Error::SizeFailed { size, .. }) => assert_eq!(size, 16),
        other => panic!("expected size failure, got {:?}", other),
    }
    assert!(!dir.path().join("icon48.png").exists());
}
