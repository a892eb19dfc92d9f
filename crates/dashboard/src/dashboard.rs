use std::future::Future;
use std::time::Duration;

use futures::{
    future::BoxFuture,
    stream::{FuturesUnordered, StreamExt},
    FutureExt,
};
use model::{
    filter::FilterCriteria,
    ranking::{FareRanking, RouteRanking},
    summary::SummaryStats,
};

use crate::{
    fetcher::{DataFetcher, RawTrip},
    filter::read_filters,
    map::MapReconciler,
    normalize::normalize_trips,
    panels::PanelRenderer,
    query::build_query,
    surface::{DisplaySurface, DrawingSurface, InputSurface, MapView},
    FetchError, FetchResult,
};

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// upper bound for each fetch, a stalled request counts as failed
    pub fetch_timeout: Duration,
    pub map_view: MapView,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            map_view: MapView::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    Idle,
    Applying,
}

/// What happened to one panel during an apply pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelUpdate {
    Updated,
    /// The fetch failed, the panel still shows what it showed before.
    Retained(FetchError),
}

impl PanelUpdate {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplyReport {
    pub criteria: FilterCriteria,
    pub summary: PanelUpdate,
    /// the map
    pub trips: PanelUpdate,
    pub routes: PanelUpdate,
    pub fares: PanelUpdate,
    /// live markers after the pass
    pub markers: usize,
}

/// Runs the filter-to-render pipeline against a data source and the page
/// surfaces.
///
/// `apply` takes `&mut self`, so a pass can not be re-entered while it is in
/// flight. Hosts that share a dashboard between triggers have to serialize
/// them; the pass that runs last determines what is shown.
pub struct Dashboard<F, I, D, M>
where
    F: DataFetcher,
    I: InputSurface,
    D: DisplaySurface,
    M: DrawingSurface,
{
    fetcher: F,
    input: I,
    panels: PanelRenderer<D>,
    map: MapReconciler<M>,
    config: DashboardConfig,
    state: DashboardState,
}

impl<F, I, D, M> Dashboard<F, I, D, M>
where
    F: DataFetcher,
    I: InputSurface,
    D: DisplaySurface,
    M: DrawingSurface,
{
    pub fn new(fetcher: F, input: I, display: D, drawing: M, config: DashboardConfig) -> Self {
        let map = MapReconciler::new(drawing, &config.map_view);
        Self {
            fetcher,
            input,
            panels: PanelRenderer::new(display),
            map,
            config,
            state: DashboardState::Idle,
        }
    }

    /// Initial pass, with whatever the inputs hold at load time.
    pub async fn load(&mut self) -> ApplyReport {
        log::info!("loading dashboard");
        self.apply().await
    }

    /// Reads the filters, fetches everything and re-renders.
    ///
    /// Never fails: a failed fetch is logged and leaves its panels as they
    /// were. Summary, trips and rankings are fetched concurrently, and each
    /// panel is rendered as soon as its own fetch completes.
    pub async fn apply(&mut self) -> ApplyReport {
        if self.state == DashboardState::Applying {
            log::warn!("previous apply pass was abandoned before it completed");
        }
        self.state = DashboardState::Applying;

        let criteria = read_filters(&self.input);
        let query = build_query(&criteria);
        log::debug!("applying filters {criteria:?}");

        let timeout = self.config.fetch_timeout;
        let fetcher = &self.fetcher;
        let query = &query;
        let mut pending: FuturesUnordered<BoxFuture<'_, Fetched>> = FuturesUnordered::new();
        pending.push(bounded(timeout, fetcher.fetch_summary()).map(Fetched::Summary).boxed());
        pending.push(bounded(timeout, fetcher.fetch_trips(query)).map(Fetched::Trips).boxed());
        pending.push(bounded(timeout, fetcher.fetch_top_routes()).map(Fetched::Routes).boxed());
        pending.push(bounded(timeout, fetcher.fetch_top_fares()).map(Fetched::Fares).boxed());

        // a panel counts as retained until its own fetch reports
        let unreported = || PanelUpdate::Retained(FetchError::Timeout { after: timeout });
        let (mut summary, mut trips, mut routes, mut fares) =
            (unreported(), unreported(), unreported(), unreported());

        // render each panel as soon as its own data is in
        while let Some(fetched) = pending.next().await {
            match fetched {
                Fetched::Summary(Ok(stats)) => {
                    self.panels.render_summary(&stats);
                    summary = PanelUpdate::Updated;
                }
                Fetched::Summary(Err(why)) => summary = retained("summary", why),
                Fetched::Trips(Ok(raw)) => {
                    let records = normalize_trips(&raw);
                    let markers = self.map.reconcile(&records);
                    log::info!("showing {markers} of {} trips on the map", records.len());
                    trips = PanelUpdate::Updated;
                }
                Fetched::Trips(Err(why)) => trips = retained("trips", why),
                Fetched::Routes(Ok(rankings)) => {
                    self.panels.render_routes(&rankings);
                    routes = PanelUpdate::Updated;
                }
                Fetched::Routes(Err(why)) => routes = retained("top routes", why),
                Fetched::Fares(Ok(rankings)) => {
                    self.panels.render_fares(&rankings);
                    fares = PanelUpdate::Updated;
                }
                Fetched::Fares(Err(why)) => fares = retained("top fares", why),
            }
        }

        self.state = DashboardState::Idle;

        ApplyReport {
            criteria,
            summary,
            trips,
            routes,
            fares,
            markers: self.map.marker_count(),
        }
    }

    pub fn state(&self) -> DashboardState {
        self.state
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn display(&self) -> &D {
        self.panels.display()
    }

    pub fn drawing(&self) -> &M {
        self.map.surface()
    }

    pub fn marker_count(&self) -> usize {
        self.map.marker_count()
    }
}

/// One completed fetch, tagged with the panel it feeds.
enum Fetched {
    Summary(FetchResult<SummaryStats>),
    Trips(FetchResult<Vec<RawTrip>>),
    Routes(FetchResult<Vec<RouteRanking>>),
    Fares(FetchResult<Vec<FareRanking>>),
}

async fn bounded<T, Fut>(after: Duration, fetch: Fut) -> FetchResult<T>
where
    Fut: Future<Output = FetchResult<T>>,
{
    tokio::time::timeout(after, fetch)
        .await
        .unwrap_or(Err(FetchError::Timeout { after }))
}

fn retained(what: &str, why: FetchError) -> PanelUpdate {
    log::error!("failed to load {what}: {why}");
    PanelUpdate::Retained(why)
}
