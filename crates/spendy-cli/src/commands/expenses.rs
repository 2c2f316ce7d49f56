//! Expenses command implementation.

use super::read_transcript;
use crate::cli::ExpensesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use spendy_annotator::{parse_conllu, AnnotatorError, UdpipeAnnotator};
use spendy_domain::traits::Annotator;
use spendy_domain::{ExpenseCandidate, Sentence};
use spendy_extractor::{ExpenseExtractor, ExtractorConfig};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Execute the expenses command.
pub fn execute_expenses(args: ExpensesArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let candidates = match &args.conllu {
        Some(path) => {
            let text = if args.stdin || args.text.is_some() {
                Some(read_transcript(args.text, args.stdin)?)
            } else {
                None
            };
            extract_from_conllu(path, text, &config.extractor)?
        }
        None => {
            let transcript = read_transcript(args.text, args.stdin)?;
            debug!(
                "Annotating with UDPipe model {} at {}",
                config.annotator.model, config.annotator.endpoint
            );
            let annotator = UdpipeAnnotator::with_timeout(
                &config.annotator.endpoint,
                &config.annotator.model,
                Duration::from_secs(config.annotator.timeout_secs),
            )?;
            ExpenseExtractor::new(annotator, config.extractor.clone())?.extract(&transcript)?
        }
    };

    println!("{}", formatter.format_candidates(&candidates)?);
    Ok(())
}

/// Run the extractor over a CoNLL-U file.
///
/// Without `text` the transcript is rebuilt from the sentences, so the
/// length limit still applies to what was parsed.
fn extract_from_conllu(
    path: &Path,
    text: Option<String>,
    config: &ExtractorConfig,
) -> Result<Vec<ExpenseCandidate>> {
    let document = fs::read_to_string(path)?;
    let sentences = parse_conllu(&document)?;
    info!("Read {} pre-annotated sentences from {}", sentences.len(), path.display());
    let transcript = text.unwrap_or_else(|| {
        sentences
            .iter()
            .map(Sentence::raw_text)
            .collect::<Vec<_>>()
            .join(" ")
    });

    let extractor = ExpenseExtractor::new(PreAnnotated(sentences), config.clone())?;
    Ok(extractor.extract(&transcript)?)
}

/// Serves sentences that were annotated ahead of time.
struct PreAnnotated(Vec<Sentence>);

impl Annotator for PreAnnotated {
    type Error = AnnotatorError;

    fn annotate(&self, _text: &str) -> std::result::Result<Vec<Sentence>, Self::Error> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use spendy_extractor::ExtractorError;
    use tempfile::TempDir;

    const RECEIPT: &str = "\
# text = I bought 2 kg rice and a lamp for $30.
1\tI\tI\tPRON\tPRP\t_\t2\tnsubj\t_\t_
2\tbought\tbuy\tVERB\tVBD\t_\t0\troot\t_\t_
3\t2\t2\tNUM\tCD\t_\t4\tnummod\t_\t_
4\tkg\tkg\tNOUN\tNN\t_\t5\tcompound\t_\t_
5\trice\trice\tNOUN\tNN\t_\t2\tobj\t_\t_
6\tand\tand\tCCONJ\tCC\t_\t8\tcc\t_\t_
7\ta\ta\tDET\tDT\t_\t8\tdet\t_\t_
8\tlamp\tlamp\tNOUN\tNN\t_\t5\tconj\t_\t_
9\tfor\tfor\tADP\tIN\t_\t11\tcase\t_\t_
10\t$\t$\tSYM\t$\t_\t11\tcompound\t_\tSpaceAfter=No
11\t30\t30\tNUM\tCD\t_\t2\tobl\t_\tSpaceAfter=No
12\t.\t.\tPUNCT\t.\t_\t2\tpunct\t_\t_
";

    fn write_receipt(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("receipt.conllu");
        fs::write(&path, RECEIPT).unwrap();
        path
    }

    #[test]
    fn test_extract_from_conllu() {
        let dir = TempDir::new().unwrap();
        let path = write_receipt(&dir);

        let candidates = extract_from_conllu(&path, None, &ExtractorConfig::default()).unwrap();
        assert_eq!(
            candidates,
            vec![
                ExpenseCandidate::new("rice", Some("2 kg".to_string()), Some("$30".to_string())),
                ExpenseCandidate::new("lamp", Some("2 kg".to_string()), Some("$30".to_string())),
            ]
        );
    }

    #[test]
    fn test_conllu_transcript_is_length_checked() {
        let dir = TempDir::new().unwrap();
        let path = write_receipt(&dir);
        let config = ExtractorConfig {
            max_transcript_length: 10,
            ..ExtractorConfig::default()
        };

        let result = extract_from_conllu(&path, None, &config);
        assert!(matches!(
            result,
            Err(CliError::Extractor(ExtractorError::TranscriptTooLong(_, 10)))
        ));
    }

    #[test]
    fn test_missing_conllu_file() {
        let dir = TempDir::new().unwrap();
        let result = extract_from_conllu(&dir.path().join("none.conllu"), None, &ExtractorConfig::default());
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
