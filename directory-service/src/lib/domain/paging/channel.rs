use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::oneshot;

use crate::domain::paging::models::PageRequest;
use crate::domain::paging::models::PageResult;
use crate::user::errors::DirectoryError;
use crate::user::ports::UserDirectory;

/// A queued request paired with the slot its result is delivered through.
type PageQueryEnvelope = (
    PageRequest,
    oneshot::Sender<Result<PageResult, DirectoryError>>,
);

/// Ordered pipeline for paginated directory queries.
///
/// Every submitter shares one bounded queue feeding a single consumer task,
/// so requests are computed strictly one at a time in arrival order. Each
/// submitter gets the result for its own request back through a dedicated
/// oneshot slot; results are never broadcast or misdelivered.
#[derive(Clone)]
pub struct PageQueryChannel {
    request_tx: mpsc::Sender<PageQueryEnvelope>,
}

impl PageQueryChannel {
    /// Queued requests before submitters start to backpressure.
    const QUEUE_CAPACITY: usize = 64;

    /// Create the channel and spawn its consumer task over the directory.
    ///
    /// The consumer runs until every clone of the channel is dropped.
    pub fn new<D>(directory: Arc<D>) -> Self
    where
        D: UserDirectory,
    {
        let (request_tx, request_rx) = mpsc::channel(Self::QUEUE_CAPACITY);

        tokio::spawn(run_query_loop(directory, request_rx));

        Self { request_tx }
    }

    /// Submit a validated request and await its correlated result.
    ///
    /// # Arguments
    /// * `request` - Validated page request
    ///
    /// # Returns
    /// The page computed for exactly this request
    ///
    /// # Errors
    /// * `Internal` - The consumer task is no longer running
    /// * Any directory error raised while computing the page
    pub async fn submit(&self, request: PageRequest) -> Result<PageResult, DirectoryError> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.request_tx
            .send((request, reply_tx))
            .await
            .map_err(|_| DirectoryError::Internal("Page query consumer is gone".to_string()))?;

        reply_rx
            .await
            .map_err(|_| DirectoryError::Internal("Page query reply was dropped".to_string()))?
    }
}

/// Consumer loop: one request at a time, in arrival order.
///
/// Each result is delivered before the next request is dequeued, so no two
/// page computations ever overlap.
async fn run_query_loop<D>(directory: Arc<D>, mut request_rx: mpsc::Receiver<PageQueryEnvelope>)
where
    D: UserDirectory,
{
    while let Some((request, reply_tx)) = request_rx.recv().await {
        let result = compute_page(directory.as_ref(), &request).await;

        // The submitter may have given up and dropped its receiver.
        let _ = reply_tx.send(result);
    }

    tracing::debug!("Page query channel closed");
}

async fn compute_page<D>(directory: &D, request: &PageRequest) -> Result<PageResult, DirectoryError>
where
    D: UserDirectory,
{
    let mut users = directory
        .slice(request.offset(), request.limit() as usize)
        .await?;

    // Each page is sorted on its own; a multi-page walk is not globally
    // sorted. The globally sorted view is list_all.
    users.sort_by(|a, b| a.email.as_str().cmp(b.email.as_str()));

    let total = directory.count().await?;

    Ok(PageResult {
        users,
        total,
        page: request.page(),
        limit: request.limit(),
    })
}
