use crate::Result;
use crate::export::practiscore::{self, PractiScoreExporter};
use crate::sources::shootnscoreit::Match;
use std::path::{Path, PathBuf};

/// A competitor with every reference resolved to its display value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Competitor {
    pub id: u64,
    pub number: Option<u32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub member_number: String,
    pub alias: String,
    pub power_factor: String,
    pub category: String,
    pub division: String,
    pub region: String,
    pub squad: String,
}

/// Everything needed to produce one match's PractiScore import.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub match_info: Match,
    pub competitors: Vec<Competitor>,
}

impl Registration {
    pub fn file_name(&self) -> String {
        practiscore::file_name(&self.match_info.name)
    }

    pub fn to_csv(&self) -> Result<Vec<u8>> {
        PractiScoreExporter::render(&self.competitors)
    }

    /// Renders the CSV fully before creating `<dir>/<file name>`.
    pub async fn write_csv(&self, dir: &Path) -> Result<PathBuf> {
        let csv = self.to_csv()?;
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(self.file_name());
        tokio::fs::write(&path, csv).await?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str, competitors: usize) -> Registration {
        Registration {
            match_info: Match {
                id: 1,
                name: name.to_string(),
                starts: None,
                venue: None,
            },
            competitors: (0..competitors)
                .map(|i| Competitor {
                    id: i as u64,
                    first_name: format!("First{}", i),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_file_name_from_match() {
        assert_eq!(
            registration("Spring Classic", 0).file_name(),
            "Spring_Classic.csv"
        );
    }

    #[tokio::test]
    async fn test_write_csv_creates_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let registration = registration("Club Night 3", 2);

        let path = registration.write_csv(&dir.path().join("out")).await.unwrap();

        assert_eq!(path.file_name().unwrap(), "Club_Night_3.csv");
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, registration.to_csv().unwrap());
        assert_eq!(String::from_utf8(written).unwrap().lines().count(), 3);
    }

    #[tokio::test]
    async fn test_write_csv_stays_inside_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");

        for name in ["Club 1/2 Day", "../escaped"] {
            let path = registration(name, 1).write_csv(&out).await.unwrap();
            assert_eq!(path.parent().unwrap(), out);
            assert!(path.exists());
        }

        assert!(!dir.path().join("escaped.csv").exists());
    }
}
