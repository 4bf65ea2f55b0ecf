//! Scenario runner driving a [`ScrollSync`] over a [`HeadlessViewport`].

use anyhow::{Context, Result};
use overlay_scroll::{
    ConfigHandle, HeadlessViewport, Point, ScrollAreaConfig, ScrollSync, Size,
};

use crate::assert::{
    evaluate_assert_conflicted, evaluate_assert_listeners, evaluate_assert_scroll,
    evaluate_assert_thumb, AssertionResult, ThumbExpectation,
};
use crate::report::ScenarioReport;
use crate::scenario::{Scenario, ScenarioStep};

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: ScenarioReport },
    Failed { report: ScenarioReport },
}

impl RunOutcome {
    pub fn report(&self) -> &ScenarioReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON with the scenario's own config.
pub fn run_scenario(input: &str) -> Result<RunOutcome> {
    let scenario = Scenario::from_json(input)?;
    run_loaded_scenario(&scenario, None)
}

/// Execute a pre-loaded scenario, optionally overriding its config.
pub fn run_loaded_scenario(
    scenario: &Scenario,
    config_override: Option<ScrollAreaConfig>,
) -> Result<RunOutcome> {
    let config = config_override.or(scenario.config).unwrap_or_default();
    config.validate().context("scenario config")?;

    let mut host = HeadlessViewport::new(scenario.viewport, scenario.content)
        .with_origin(scenario.origin)
        .with_placement(config.placement);
    if let Some(ratio) = scenario.pixel_ratio {
        host = host.with_pixel_ratio(ratio);
    }

    let handle = ConfigHandle::new(config);
    let mut sync = ScrollSync::mount(host, handle.clone());

    for (step_index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!("step {}: {}", step_index, step.name());
        let result = match step {
            ScenarioStep::ResizeViewport { width, height } => {
                sync.host_mut().set_viewport_size(Size::new(*width, *height));
                sync.on_viewport_resize();
                AssertionResult::Passed
            }
            ScenarioStep::ResizeContent { width, height } => {
                sync.host_mut().set_content_size(Size::new(*width, *height));
                sync.on_content_resize();
                AssertionResult::Passed
            }
            ScenarioStep::ScrollTo { axis, value } => {
                sync.host_mut().scroll_to(*axis, *value);
                sync.on_scroll();
                AssertionResult::Passed
            }
            ScenarioStep::PointerDown { x, y, axis } => {
                let point = Point::new(*x, *y);
                let started = match axis {
                    Some(axis) => sync.pointer_down(*axis, point).then_some(*axis),
                    None => sync.pointer_press(point),
                };
                match started {
                    Some(axis) => tracing::debug!("{:?} drag started", axis),
                    None => tracing::debug!("press at ({x}, {y}) did not start a drag"),
                }
                AssertionResult::Passed
            }
            ScenarioStep::PointerMove { x, y } => {
                sync.pointer_move(Point::new(*x, *y));
                AssertionResult::Passed
            }
            ScenarioStep::PointerUp => {
                sync.pointer_up();
                AssertionResult::Passed
            }
            ScenarioStep::CaptureLost => {
                sync.capture_lost();
                AssertionResult::Passed
            }
            ScenarioStep::SetConfig { config } => {
                config
                    .validate()
                    .with_context(|| format!("set_config at step {step_index}"))?;
                handle.set(*config);
                sync.host_mut().set_placement(config.placement);
                sync.on_config_change();
                AssertionResult::Passed
            }
            ScenarioStep::AssertThumb {
                axis,
                visible,
                offset,
                length,
                tolerance,
            } => {
                let expected = ThumbExpectation {
                    visible: *visible,
                    offset: *offset,
                    length: *length,
                    tolerance: *tolerance,
                };
                evaluate_assert_thumb(*axis, &expected, sync.host())
            }
            ScenarioStep::AssertScroll {
                axis,
                value,
                tolerance,
            } => evaluate_assert_scroll(*axis, *value, *tolerance, sync.host()),
            ScenarioStep::AssertListeners { count } => {
                evaluate_assert_listeners(*count, sync.host())
            }
            ScenarioStep::AssertConflicted { value } => {
                evaluate_assert_conflicted(*value, sync.last_render())
            }
        };

        if let AssertionResult::Failed { code, message } = result {
            tracing::info!("step {} ({}) failed: {}", step_index, step.name(), message);
            let report = ScenarioReport::failed(
                step_index,
                step.name(),
                code,
                message,
                sync.host().apply_count(),
            );
            return Ok(RunOutcome::Failed { report });
        }
    }

    let report = ScenarioReport::passed(scenario.steps.len(), sync.host().apply_count());
    Ok(RunOutcome::Passed { report })
}
