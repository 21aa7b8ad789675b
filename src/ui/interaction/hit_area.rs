//! Clickable regions registered during rendering.

use ratatui::layout::Rect;
use ratatui::style::Style;
use uuid::Uuid;

use crate::ui::element_ids;

/// What a click on a hit area does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    // Toolbar
    AddTodo,
    FocusSearch,

    // Row actions
    /// Open the row for editing
    EditTodo(Uuid),
    DeleteTodo(Uuid),
    /// Flip the completed checkbox
    ToggleCompleted(Uuid),
    /// Move the selection to the row
    SelectRow(Uuid),

    // Edit mode
    SaveTodo,
    CancelEdit,
    FocusTitle,
    FocusDescription,

    // Grid chrome
    /// Header cell of the named column; inert
    ColumnHeader(&'static str),
    PrevPage,
    NextPage,
}

impl ClickAction {
    /// Stable element identifier of the control this action belongs to.
    pub fn element_id(&self) -> &'static str {
        match self {
            ClickAction::AddTodo => element_ids::ADD_TODO_BUTTON,
            ClickAction::FocusSearch => element_ids::SEARCH_TODO_INPUT,
            ClickAction::EditTodo(_) => element_ids::EDIT_TODO_BUTTON,
            ClickAction::DeleteTodo(_) => element_ids::DELETE_TODO_BUTTON,
            ClickAction::SaveTodo => element_ids::SAVE_TODO_BUTTON,
            ClickAction::CancelEdit => element_ids::CANCEL_EDIT_BUTTON,
            ClickAction::FocusTitle => element_ids::EDIT_TITLE_INPUT,
            ClickAction::FocusDescription => element_ids::EDIT_DESCRIPTION_INPUT,
            ClickAction::ColumnHeader(_) => element_ids::COLUMN_TITLE,
            ClickAction::ToggleCompleted(_)
            | ClickAction::SelectRow(_)
            | ClickAction::PrevPage
            | ClickAction::NextPage => element_ids::TODO_GRID,
        }
    }
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style applied while the mouse is over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }

    pub fn element_id(&self) -> &'static str {
        self.action.element_id()
    }
}

/// Hit areas of the current frame.
///
/// Cleared at the start of each render. Later registrations sit on top of
/// earlier ones when regions overlap.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    /// Index of the area under the mouse
    hovered: Option<usize>,
    /// Last mouse position, re-applied after each render
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas. The pointer position is kept.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.topmost(x, y)
            .and_then(|idx| self.areas.get(idx))
            .map(|area| area.action.clone())
    }

    /// Track the mouse. Returns true when the hovered area changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let hovered = self.topmost(x, y);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// Recompute hover against freshly registered areas.
    pub fn refresh_hover(&mut self) {
        self.hovered = self.pointer.and_then(|(x, y)| self.topmost(x, y));
    }

    pub fn hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|idx| self.areas.get(idx))
    }

    /// All areas carrying `element_id`, in registration order.
    pub fn find_by_element<'a>(
        &'a self,
        element_id: &'a str,
    ) -> impl Iterator<Item = &'a HitArea> + 'a {
        self.areas
            .iter()
            .filter(move |area| area.element_id() == element_id)
    }

    /// First area whose action equals `action`.
    pub fn find_action(&self, action: &ClickAction) -> Option<&HitArea> {
        self.areas.iter().find(|area| &area.action == action)
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    fn topmost(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(idx, _)| idx)
    }
}
