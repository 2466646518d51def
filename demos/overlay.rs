use std::env;

use dominant_overlay::{
    decode_image, encode_image, CreateOverlay, DetectEdges, EdgeDetectionParams,
    HistogramConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 5 {
        eprintln!(
            "Usage: {} [foreground] [background] [overlay_output] [edges_output]",
            args[0]
        );
        eprintln!(
            "Example: {} foreground.jpg background.jpg overlay.jpg output.jpg",
            args[0]
        );
        std::process::exit(1);
    }

    let arg = |index: usize, default: &'static str| {
        args.get(index).map_or(default, String::as_str).to_owned()
    };
    let foreground_path = arg(1, "foreground.jpg");
    let background_path = arg(2, "background.jpg");
    let overlay_path = arg(3, "overlay.jpg");
    let edges_path = arg(4, "output.jpg");

    // 入力画像を読み込み
    let foreground = decode_image(&foreground_path)?;
    let background = decode_image(&background_path)?;

    // 前景の支配色を背景で置き換え
    let overlay = foreground.create_overlay(&background, &HistogramConfig::default())?;
    encode_image(&overlay, &overlay_path)?;
    println!(
        "Wrote overlay {}x{} to {}",
        overlay.width(),
        overlay.height(),
        overlay_path
    );

    // 背景のエッジ検出
    let edges = background.detect_edges(&EdgeDetectionParams::default())?;
    encode_image(&edges, &edges_path)?;
    println!(
        "Wrote edge map {}x{} to {}",
        edges.width(),
        edges.height(),
        edges_path
    );

    Ok(())
}
