//! LaTeX document assembly and PDF compilation.

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

const PREAMBLE: &str = r"\documentclass{article}
\usepackage{mathtools}
\begin{document}

$$
\begin{matrix*}[l]
";

const POSTAMBLE: &str = r"
\end{matrix*}
$$
\end{document}
";

/// A standalone article holding one rendered polynomial in a `matrix*`.
#[derive(Clone, Debug)]
pub struct Document {
    body: String,
}

impl Document {
    /// Wraps matrix rows produced by [`polya_poly::LatexStyle::render`].
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// The complete `.tex` source.
    pub fn source(&self) -> String {
        format!("{PREAMBLE}    {}{POSTAMBLE}", self.body)
    }

    /// Writes the source to `path`.
    pub fn write(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.source())?;
        debug!(path = %path.display(), bytes = self.body.len(), "wrote document");
        Ok(())
    }
}

/// Runs an external `pdflatex`-compatible compiler.
#[derive(Clone, Debug)]
pub struct PdfLatex {
    program: String,
}

/// Files pdflatex leaves next to the output that nobody reads.
const AUX_EXTENSIONS: [&str; 2] = ["aux", "log"];

impl PdfLatex {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Compiles `tex` in its own directory, non-interactively.
    pub fn compile(&self, tex: &Path) -> Result<()> {
        let dir = tex.parent().filter(|d| !d.as_os_str().is_empty());
        let file = tex
            .file_name()
            .with_context(|| format!("{} has no file name", tex.display()))?;

        let mut cmd = Command::new(&self.program);
        cmd.arg("-interaction=batchmode").arg(file);
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }
        debug!(?cmd, "running compiler");

        let status = cmd
            .status()
            .with_context(|| format!("could not run `{}`", self.program))?;
        if !status.success() {
            bail!("`{}` exited with {status}", self.program);
        }
        Ok(())
    }

    /// Removes the `.aux` and `.log` files produced next to `tex`.
    pub fn clean(&self, tex: &Path) -> io::Result<()> {
        for ext in AUX_EXTENSIONS {
            let path = tex.with_extension(ext);
            match fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "removed"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    warn!(path = %path.display(), "expected auxiliary file is missing");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_source_wraps_body() {
        let doc = Document::new("1&x_{1}".to_owned());
        let src = doc.source();
        assert!(src.starts_with("\\documentclass{article}"));
        assert!(src.contains("\\begin{matrix*}[l]\n    1&x_{1}\n\\end{matrix*}"));
        assert!(src.trim_end().ends_with("\\end{document}"));
    }

    #[test]
    fn test_clean_removes_aux_files() {
        let dir = TempDir::new().unwrap();
        let dir = dir.path();
        let tex = dir.join("funcs.tex");
        fs::write(dir.join("funcs.aux"), "").unwrap();
        fs::write(dir.join("funcs.log"), "").unwrap();

        PdfLatex::new("pdflatex").clean(&tex).unwrap();
        assert!(!dir.join("funcs.aux").exists());
        assert!(!dir.join("funcs.log").exists());

        // A second pass finds nothing to remove and still succeeds.
        PdfLatex::new("pdflatex").clean(&tex).unwrap();
    }

    #[test]
    fn test_compile_missing_program() {
        let dir = TempDir::new().unwrap();
        let tex = dir.path().join("funcs.tex");
        let err = PdfLatex::new("polya-no-such-latex-binary")
            .compile(&tex)
            .unwrap_err();
        assert!(err.to_string().contains("could not run"));
    }
}
