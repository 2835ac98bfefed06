use crate::application::dto::{AuditRequest, AuditResponse};
use crate::application::read_models::AuditReadModelBuilder;
use crate::nbs_analysis::domain::{NbsSet, RevDepGraph};
use crate::nbs_analysis::services::{AnalysisOutcome, GraphBuilder, RemovabilityEngine};
use crate::ports::outbound::{
    HistoryRecorder, IndexRepository, ListingReader, NbsListing, ProgressReporter,
};
use crate::shared::Result;

/// AuditArchiveUseCase - Core use case for the NBS removability audit
///
/// This use case orchestrates the full analysis workflow using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `LR` - ListingReader implementation
/// * `IR` - IndexRepository implementation
/// * `PR` - ProgressReporter implementation
/// * `HR` - HistoryRecorder implementation (optional)
pub struct AuditArchiveUseCase<LR, IR, PR, HR> {
    listing_reader: LR,
    index_repository: IR,
    progress_reporter: PR,
    history_recorder: Option<HR>,
}

impl<LR, IR, PR, HR> AuditArchiveUseCase<LR, IR, PR, HR>
where
    LR: ListingReader,
    IR: IndexRepository,
    PR: ProgressReporter,
    HR: HistoryRecorder,
{
    /// Creates a new AuditArchiveUseCase with injected dependencies
    pub fn new(
        listing_reader: LR,
        index_repository: IR,
        progress_reporter: PR,
        history_recorder: Option<HR>,
    ) -> Self {
        Self {
            listing_reader,
            index_repository,
            progress_reporter,
            history_recorder,
        }
    }

    /// Executes the audit use case
    ///
    /// # Arguments
    /// * `request` - Audit request with the listings directory and suite
    ///
    /// # Returns
    /// AuditResponse carrying the audit read model
    pub fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Read listing files and derive the NBS membership set
        let listings = self.read_and_report_listings(&request)?;
        let nbs: NbsSet = listings.iter().map(|l| l.package.clone()).collect();

        // Step 2: Build the reverse-dependency graph
        let mut graph = self.build_graph(&listings)?;

        // Step 3: Run the removability engine (prunes the graph in place)
        let outcome = self.classify(&mut graph, &nbs)?;

        // Step 4: Assemble the read model
        let read_model =
            AuditReadModelBuilder::new(request.suite.clone()).build(&graph, &nbs, &outcome);

        // Step 5: Append the time-series point when a recorder is wired in
        if let Some(recorder) = &self.history_recorder {
            recorder.record(&read_model.summary)?;
            self.progress_reporter.report("🗓  Recorded history point");
        }

        self.progress_reporter.report_completion(&format!(
            "Done: {} of {} NBS package(s) removable",
            read_model.summary.removable, read_model.summary.nbs_total
        ));

        Ok(AuditResponse::new(read_model))
    }

    /// Reads the listing directory, reporting progress
    fn read_and_report_listings(&self, request: &AuditRequest) -> Result<Vec<NbsListing>> {
        self.progress_reporter.report(&format!(
            "📖 Loading reverse-dependency listings from: {}",
            request.listings_dir.display()
        ));

        let listings = self.listing_reader.read_listings(&request.listings_dir)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} NBS package(s)", listings.len()));

        Ok(listings)
    }

    /// Builds the graph one listing at a time so progress is visible
    fn build_graph(&self, listings: &[NbsListing]) -> Result<RevDepGraph> {
        let mut builder = GraphBuilder::new();
        for (index, listing) in listings.iter().enumerate() {
            self.progress_reporter.report_progress(
                index + 1,
                listings.len(),
                Some(listing.package.as_str()),
            );
            builder.ingest(listing)?;
        }
        Ok(builder.finish())
    }

    /// Runs the engine and surfaces any index warnings it accumulated
    fn classify(&self, graph: &mut RevDepGraph, nbs: &NbsSet) -> Result<AnalysisOutcome> {
        self.progress_reporter
            .report("🔍 Computing removable cluster...");

        let engine = RemovabilityEngine::new(&self.index_repository, nbs);
        let outcome = engine.analyze(graph)?;

        for warning in &outcome.index_warnings {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", warning));
        }

        Ok(outcome)
    }
}
