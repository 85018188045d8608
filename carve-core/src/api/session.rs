//! Document session: load once, chunk many times

use crate::annotation::{AnnotatedDocument, Annotator};
use crate::api::{ChunkRequest, Config, Error, Result};
use crate::application::{
    partition_by_count, partition_by_length, Partition, PartitionOutcome, SentenceExecutor,
};
use crate::domain::SentenceArtifact;
use serde::{Deserialize, Serialize};

/// Chunks of one sentence together with where they came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceChunks {
    /// Position of the sentence in the document
    pub index: usize,
    /// Verbatim sentence text
    pub sentence: String,
    /// Chunks in reading order
    pub chunks: Vec<String>,
    /// Which search path produced the chunks
    pub outcome: PartitionOutcome,
}

#[derive(Debug)]
struct LoadedDocument {
    artifacts: Vec<SentenceArtifact>,
}

/// Holds the artifacts of the most recently loaded document
///
/// Loading takes `&mut self`, so a reload can never overlap a chunking call
/// on the same session.
#[derive(Debug)]
pub struct DocumentSession<A: Annotator> {
    annotator: A,
    config: Config,
    executor: SentenceExecutor,
    document: Option<LoadedDocument>,
}

impl<A: Annotator> DocumentSession<A> {
    /// Create a session with default configuration
    pub fn new(annotator: A) -> Self {
        Self {
            annotator,
            config: Config::default(),
            executor: SentenceExecutor::sequential(),
            document: None,
        }
    }

    /// Create a session with custom configuration
    pub fn with_config(annotator: A, config: Config) -> Result<Self> {
        config.validate()?;
        let executor = SentenceExecutor::new(config.threads, config.parallel_threshold)
            .map_err(|e| Error::Configuration(e.to_string()))?;

        Ok(Self {
            annotator,
            config,
            executor,
            document: None,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Annotate `text` and replace the loaded document
    ///
    /// On error the previously loaded document stays in place.
    pub fn load_document(&mut self, text: &str) -> Result<()> {
        let document = self.annotator.annotate(text)?;
        self.load_annotated(document)
    }

    /// Replace the loaded document with already annotated input
    pub fn load_annotated(&mut self, document: AnnotatedDocument) -> Result<()> {
        document.validate()?;

        if document.text.is_empty() {
            log::debug!("Empty document loaded; session is unloaded");
            self.document = None;
            return Ok(());
        }

        let artifacts: Vec<SentenceArtifact> = document
            .sentences
            .iter()
            .filter(|sentence| !sentence.tokens.is_empty())
            .map(|sentence| SentenceArtifact::build(&document.text, sentence))
            .collect();

        log::debug!(
            "Loaded document: {} sentences, {} tokens",
            artifacts.len(),
            artifacts.iter().map(SentenceArtifact::token_count).sum::<usize>()
        );

        self.document = Some(LoadedDocument { artifacts });
        Ok(())
    }

    /// Whether a non-empty document is loaded
    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    fn artifacts(&self) -> Result<&[SentenceArtifact]> {
        self.document
            .as_ref()
            .map(|doc| doc.artifacts.as_slice())
            .ok_or(Error::NotLoaded)
    }

    /// Number of sentences in the loaded document
    pub fn sentence_count(&self) -> Result<usize> {
        Ok(self.artifacts()?.len())
    }

    /// Verbatim sentence texts, independent of chunking
    pub fn to_sentences(&self) -> Result<Vec<String>> {
        Ok(self
            .artifacts()?
            .iter()
            .map(|artifact| artifact.text().to_string())
            .collect())
    }

    /// At most `target_count` chunks per sentence, all sentences flattened
    pub fn to_chunks_by_count(&self, target_count: usize) -> Result<Vec<String>> {
        self.flattened(ChunkRequest::ByCount(target_count))
    }

    /// Chunks of at most `max_length` characters, all sentences flattened
    pub fn to_chunks_by_length(&self, max_length: usize) -> Result<Vec<String>> {
        self.flattened(ChunkRequest::ByLength(max_length))
    }

    /// Dispatch on whichever of `target_count` or `max_length` is given
    pub fn to_chunks(
        &self,
        target_count: Option<usize>,
        max_length: Option<usize>,
    ) -> Result<Vec<String>> {
        self.artifacts()?;
        self.flattened(ChunkRequest::from_options(target_count, max_length)?)
    }

    /// Chunk every sentence, keeping per-sentence grouping
    pub fn chunk_sentences(&self, request: ChunkRequest) -> Result<Vec<SentenceChunks>> {
        let artifacts = self.artifacts()?;
        let request = request.validate()?;

        let partitions: Vec<Partition> = match request {
            ChunkRequest::ByCount(count) => self
                .executor
                .run(artifacts, |artifact| partition_by_count(artifact, count)),
            ChunkRequest::ByLength(length) => self
                .executor
                .run(artifacts, |artifact| partition_by_length(artifact, length)),
        };

        Ok(artifacts
            .iter()
            .zip(partitions)
            .enumerate()
            .map(|(index, (artifact, partition))| {
                log::trace!("Sentence {index}: {:?}", partition.outcome);
                SentenceChunks {
                    index,
                    sentence: artifact.text().to_string(),
                    chunks: partition.chunks,
                    outcome: partition.outcome,
                }
            })
            .collect())
    }

    fn flattened(&self, request: ChunkRequest) -> Result<Vec<String>> {
        Ok(self
            .chunk_sentences(request)?
            .into_iter()
            .flat_map(|sentence| sentence.chunks)
            .collect())
    }
}
