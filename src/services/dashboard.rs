use crate::ADMIN_ROLE;
use crate::dto::dashboard::DashboardDto;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DashboardReader;
use crate::services::ServiceResult;
use crate::services::auth::ensure_role;

/// Aggregate counters shown on the admin dashboard.
pub fn load_dashboard<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<DashboardDto>
where
    R: DashboardReader + ?Sized,
{
    ensure_role(user, ADMIN_ROLE)?;

    let totals = repo.dashboard_totals()?;
    Ok(totals.into())
}
