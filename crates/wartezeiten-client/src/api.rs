//! Abstract interface of the Wartezeiten API.

use crate::error::Error;
use crate::types::*;
use async_trait::async_trait;

/// Operations offered by the Wartezeiten.APP / Waitingtimes.APP API.
///
/// [`WartezeitenClient`](crate::WartezeitenClient) implements this over HTTP.
/// Front ends written against the trait can be driven by any other
/// implementation, such as an in-memory fake in tests.
#[async_trait]
pub trait WartezeitenApi: Send + Sync {
    /// `GET /v1/parks`: available theme parks.
    async fn get_parks(&self, request: &ParksRequest) -> Result<GetParksResponse, Error>;

    /// `GET /v1/openingtimes`: opening times of a park.
    async fn get_opening_times(
        &self,
        request: &OpeningTimesRequest,
    ) -> Result<GetOpeningTimesResponse, Error>;

    /// `GET /v1/waitingtimes`: current queue times of a park.
    async fn get_waiting_times(
        &self,
        request: &WaitingTimesRequest,
    ) -> Result<GetWaitingTimesResponse, Error>;
}
