use std::fs;

use crate::models::Config;

const CONFIG_FILE: &str = "icongen.conf";

// Largest edge the renderer will accept from the config file
const MAX_ICON_SIZE: u32 = 8192;

/// Read `icongen.conf` from the working directory. A missing file, missing
/// keys or unparsable values all fall back to the built-in defaults, so a
/// bare run behaves exactly like the stock generator.
pub fn read_config() -> Config {
    match fs::read_to_string(CONFIG_FILE) {
        Ok(content) => parse_config(&content),
        Err(_) => Config::default(),
    }
}

pub fn parse_config(content: &str) -> Config {
    let mut cfg = Config::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            match k.trim() {
                "out_dir" => {
                    let v = v.trim();
                    if !v.is_empty() {
                        cfg.out_dir = v.to_string();
                    }
                }
                "master_size" => {
                    cfg.master_size = v
                        .trim()
                        .parse::<u32>()
                        .map(|n| n.max(64).min(MAX_ICON_SIZE))
                        .unwrap_or(cfg.master_size)
                }
                "sizes" => {
                    let parsed: Vec<u32> = v
                        .split(',')
                        .filter_map(|s| s.trim().parse::<u32>().ok())
                        .filter(|&n| n > 0 && n <= MAX_ICON_SIZE)
                        .collect();
                    if !parsed.is_empty() {
                        cfg.sizes = parsed;
                    }
                }
                _ => {}
            }
        }
    }
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_on_empty_input() {
        let cfg = parse_config("");
        assert_eq!(cfg.master_size, 1024);
        assert_eq!(cfg.sizes, vec![16, 32, 64, 128, 256, 512, 1024]);
        assert_eq!(
            cfg.out_dir,
            "SunlightTracker/Assets.xcassets/AppIcon.appiconset"
        );
    }

    #[test]
    fn test_junk_values_keep_defaults() {
        let cfg = parse_config("master_size=huge\nsizes=,,\nout_dir=\nnot a line");
        assert_eq!(cfg.master_size, 1024);
        assert_eq!(cfg.sizes.len(), 7);
        assert!(!cfg.out_dir.is_empty());
    }

    #[test]
    fn test_overrides_apply() {
        let cfg = parse_config(
            "# comment\nout_dir=build/icons\nmaster_size=512\nsizes=16, 32 ,512\n",
        );
        assert_eq!(cfg.out_dir, "build/icons");
        assert_eq!(cfg.master_size, 512);
        assert_eq!(cfg.sizes, vec![16, 32, 512]);
    }

    #[test]
    fn test_master_size_floor() {
        let cfg = parse_config("master_size=8");
        assert_eq!(cfg.master_size, 64);
    }

    #[test]
    fn test_oversized_values_are_clamped() {
        let cfg = parse_config("master_size=70000\nsizes=16,70000,512");
        assert_eq!(cfg.master_size, MAX_ICON_SIZE);
        assert_eq!(cfg.sizes, vec![16, 512]);
    }
}
