mod plan_response;

pub use plan_response::PlanResponseUseCase;
