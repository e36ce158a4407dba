//! `EmptyState` widget: placeholder for views with nothing to show.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tablero_core::{
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Brick, BrickAssertion, BrickBudget, BrickVerification, Canvas, Color, Constraints, Event,
    FontStyle, FontWeight, MouseButton, Point, Rect, Size, TypeId, Widget,
};

const ACTION_WIDTH: f32 = 120.0;
const ACTION_HEIGHT: f32 = 32.0;

/// Message emitted when the action button is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateActionInvoked {
    /// Label of the invoked action
    pub label: String,
}

/// Centered placeholder with a title, optional description, and an optional
/// call-to-action button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyState {
    /// Headline
    title: String,
    /// Supporting copy
    description: Option<String>,
    /// Action button label (None = no button)
    action_label: Option<String>,
    /// Icon badge color
    badge_color: Color,
    /// Title color
    title_color: Color,
    /// Description color
    muted_color: Color,
    /// Action button background
    action_bg: Color,
    /// Action button text
    action_text: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl EmptyState {
    /// Create an empty state with a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            action_label: None,
            badge_color: Color::new(0.93, 0.93, 0.93, 1.0),
            title_color: Color::new(0.1, 0.1, 0.1, 1.0),
            muted_color: Color::new(0.45, 0.45, 0.45, 1.0),
            action_bg: Color::new(0.2, 0.47, 0.96, 1.0),
            action_text: Color::WHITE,
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the supporting description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a call-to-action button.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    fn action_rect(&self) -> Option<Rect> {
        self.action_label.as_ref()?;
        let center = self.bounds.center();
        Some(Rect::new(
            center.x - ACTION_WIDTH / 2.0,
            self.bounds.y + self.bounds.height - ACTION_HEIGHT - 16.0,
            ACTION_WIDTH,
            ACTION_HEIGHT,
        ))
    }
}

impl Widget for EmptyState {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let mut height = 140.0;
        if self.description.is_some() {
            height += 24.0;
        }
        if self.action_label.is_some() {
            height += ACTION_HEIGHT + 16.0;
        }
        constraints.constrain(Size::new(320.0, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let center_x = self.bounds.center().x;

        // Icon badge
        canvas.fill_circle(
            Point::new(center_x, self.bounds.y + 48.0),
            28.0,
            self.badge_color,
        );

        canvas.draw_text(
            &self.title,
            Point::new(center_x, self.bounds.y + 96.0),
            &TextStyle {
                size: 18.0,
                color: self.title_color,
                weight: FontWeight::Semibold,
                ..TextStyle::default()
            },
        );

        if let Some(description) = &self.description {
            canvas.draw_text(
                description,
                Point::new(center_x, self.bounds.y + 120.0),
                &TextStyle {
                    size: 14.0,
                    color: self.muted_color,
                    style: FontStyle::Italic,
                    ..TextStyle::default()
                },
            );
        }

        if let (Some(label), Some(rect)) = (&self.action_label, self.action_rect()) {
            canvas.fill_rect(rect, self.action_bg);
            canvas.draw_text(
                label,
                Point::new(rect.center().x, rect.center().y),
                &TextStyle {
                    size: 14.0,
                    color: self.action_text,
                    weight: FontWeight::Medium,
                    ..TextStyle::default()
                },
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        else {
            return None;
        };
        let rect = self.action_rect()?;
        if rect.contains_point(position) {
            return Some(Box::new(EmptyStateActionInvoked {
                label: self.action_label.clone().unwrap_or_default(),
            }));
        }
        None
    }

    fn is_interactive(&self) -> bool {
        self.action_label.is_some()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

impl Brick for EmptyState {
    fn brick_name(&self) -> &'static str {
        "EmptyState"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[
            BrickAssertion::TextVisible,
            BrickAssertion::ContrastRatio(4.5),
        ]
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(8)
    }

    fn verify(&self) -> BrickVerification {
        let mut verification = BrickVerification::default();
        for assertion in self.assertions() {
            match assertion {
                BrickAssertion::ContrastRatio(required) => {
                    let ratio = self.action_text.contrast_ratio(&self.action_bg);
                    if ratio >= *required {
                        verification.passed.push(assertion.clone());
                    } else {
                        verification
                            .failed
                            .push((assertion.clone(), format!("{ratio:.2}:1")));
                    }
                }
                other => verification.passed.push(other.clone()),
            }
        }
        verification
    }
}
