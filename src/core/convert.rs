use std::{
    ffi::OsString,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use log::info;

use super::{
    error::{Error, FdResult},
    map::MapScanner,
};

pub const MAP_SUFFIX: &str = ".map";
pub const SYM_SUFFIX: &str = "_opmdeb.sym";

/// Input and output paths of a single conversion
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MapFiles {
    pub map: PathBuf,
    pub sym: PathBuf,
}

impl MapFiles {
    /// Derive both paths from the root of the file name.
    /// The suffixes are appended as-is, dots in the root are kept.
    pub fn from_base(base: impl AsRef<Path>) -> Self {
        Self {
            map: with_suffix(base.as_ref(), MAP_SUFFIX),
            sym: with_suffix(base.as_ref(), SYM_SUFFIX),
        }
    }

    pub fn with_output(mut self, sym: Option<PathBuf>) -> Self {
        if let Some(sym) = sym {
            self.sym = sym;
        }
        self
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
pub struct ConvertSummary {
    pub lines: usize,
    pub records: usize,
}

/// Write one equ line per symbol of the map read from `input`
pub fn convert<R: BufRead, W: Write>(input: R, output: &mut W) -> FdResult<ConvertSummary> {
    let mut records = MapScanner::new().records(input);
    let mut count = 0;
    for record in records.by_ref() {
        writeln!(output, "{}", record?)?;
        count += 1;
    }
    Ok(ConvertSummary {
        lines: records.scanner().lines(),
        records: count,
    })
}

/// Convert the map file into the sym file.
/// The whole map is converted in memory first, so the sym file is only
/// created or truncated once the map could be read completely.
pub fn convert_files(files: &MapFiles) -> FdResult<ConvertSummary> {
    let input = File::open(&files.map).map_err(|err| Error::file_access(&files.map, err))?;

    let mut buffer = Vec::new();
    let summary = convert(BufReader::new(input), &mut buffer).map_err(|err| match err {
        Error::Io(err) => Error::file_access(&files.map, err),
        err => err,
    })?;

    let mut output = File::create(&files.sym).map_err(|err| Error::file_access(&files.sym, err))?;
    output.write_all(&buffer)?;
    output.flush()?;

    info!(
        "{} -> {}: {} symbols from {} lines",
        files.map.display(),
        files.sym.display(),
        summary.records,
        summary.lines
    );
    Ok(summary)
}

#[cfg(test)]
mod test {
    use std::path::{Path, PathBuf};

    use super::{convert, convert_files, ConvertSummary, MapFiles};
    use crate::core::error::Error;

    const MAP: &str = "\
Area                                    Addr        Size        Decimal Bytes (Attributes)
--------------------------------        ----        ----        ------- ----- ------------
_CODE                               00004000    00000120 =         288. bytes (REL,CON)

      Value  Global           Global Defined In Module
      -----  --------------------------------
     00004010  _main                              main
_DATA                               0000C000    00000004 =           4. bytes (REL,CON)

      Value  Global           Global Defined In Module
      -----  --------------------------------
     0000C000  _score                             main
     0000C002  _lives                             main
_INITIALIZED                        0000C004    00000001 =           1. bytes (REL,CON)
     0000C004  _level                             main
_GSINIT                             00004120    00000010 =          16. bytes (REL,CON)
     00004120  gsinit_start                       crt0
";

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("map2sym-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn sdcc_map() {
        let mut out = Vec::new();
        let summary = convert(MAP.as_bytes(), &mut out).unwrap();
        assert_eq!(
            "\
_score: equ 0000C000H
_lives: equ 0000C002H
_level: equ 0000C004H
",
            String::from_utf8(out).unwrap()
        );
        assert_eq!(
            ConvertSummary {
                lines: 17,
                records: 3
            },
            summary
        );
    }

    #[test]
    fn paths_from_base() {
        let files = MapFiles::from_base("build/game.v2");
        assert_eq!(Path::new("build/game.v2.map"), files.map);
        assert_eq!(Path::new("build/game.v2_opmdeb.sym"), files.sym);

        let files = files.with_output(Some(PathBuf::from("out.sym")));
        assert_eq!(Path::new("out.sym"), files.sym);
    }

    #[test]
    fn files_roundtrip() {
        let dir = temp_dir("files");
        let files = MapFiles::from_base(dir.join("game"));
        std::fs::write(&files.map, MAP).unwrap();

        convert_files(&files).unwrap();
        let first = std::fs::read(&files.sym).unwrap();
        convert_files(&files).unwrap();
        let second = std::fs::read(&files.sym).unwrap();

        assert_eq!(first, second);
        assert_eq!(3, String::from_utf8(first).unwrap().lines().count());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn empty_output() {
        let dir = temp_dir("empty");
        let files = MapFiles::from_base(dir.join("game"));
        std::fs::write(&files.map, "_CODE\n     00004010  _main\n").unwrap();
        std::fs::write(&files.sym, "stale\n").unwrap();

        let summary = convert_files(&files).unwrap();
        assert_eq!(0, summary.records);
        assert_eq!("", std::fs::read_to_string(&files.sym).unwrap());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_map() {
        let dir = temp_dir("missing");
        let files = MapFiles::from_base(dir.join("game"));

        let err = convert_files(&files).unwrap_err();
        assert!(matches!(err, Error::FileAccess { ref path, .. } if *path == files.map));
        assert!(!files.sym.exists());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn unreadable_map_keeps_sym() {
        let dir = temp_dir("unreadable");
        let files = MapFiles::from_base(dir.join("game"));
        let mut map = b"_DATA\n     0000C000  _a                                 main\n".to_vec();
        map.extend_from_slice(b"\xff\xfe bad\n");
        std::fs::write(&files.map, map).unwrap();
        std::fs::write(&files.sym, "previous good sym\n").unwrap();

        let err = convert_files(&files).unwrap_err();
        assert!(matches!(err, Error::FileAccess { ref path, .. } if *path == files.map));
        assert!(err.to_string().contains("game.map"));
        assert_eq!(
            "previous good sym\n",
            std::fs::read_to_string(&files.sym).unwrap()
        );
        std::fs::remove_dir_all(dir).unwrap();
    }
}
