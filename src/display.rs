//! What the view draws for each column.

use crate::{
    config::BoardConfig,
    domain::{Board, Card, ColumnKey},
    drag::DragState,
};

/// One entry in a column as rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem<'a> {
    /// A visible card and its stored index
    Card { index: usize, card: &'a Card },
    /// The drop placeholder of the active drag
    Marker,
}

/// A column ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    pub key: ColumnKey,
    pub title: &'a str,
    pub items: Vec<DisplayItem<'a>>,
}

/// Cards of `column` with the dragged card hidden and the marker shown at its
/// resolved slot
pub fn display_list<'a>(board: &'a Board, drag: &DragState, column: ColumnKey) -> Vec<DisplayItem<'a>> {
    let mut items: Vec<DisplayItem<'a>> = board
        .cards(column)
        .iter()
        .enumerate()
        .filter(|(index, _)| !drag.session().is_some_and(|s| s.is_source(column, *index)))
        .map(|(index, card)| DisplayItem::Card { index, card })
        .collect();

    if let (Some(session), Some(marker)) = (drag.session(), drag.marker()) {
        if marker.column == column {
            let at = marker.display_index(session).min(items.len());
            items.insert(at, DisplayItem::Marker);
        }
    }

    items
}

/// Every column in board order, titled from the configuration
pub fn columns<'a>(board: &'a Board, drag: &DragState, config: &'a BoardConfig) -> Vec<ColumnView<'a>> {
    ColumnKey::ALL
        .into_iter()
        .map(|key| ColumnView {
            key,
            title: config.title_for(key),
            items: display_list(board, drag, key),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::{InsertionResolver, Side};

    fn board() -> Board {
        let mut board = Board::new();
        for text in ["A", "B", "C"] {
            board.append_card(ColumnKey::Todo, Card::new(text));
        }
        board
    }

    fn render(items: &[DisplayItem<'_>]) -> Vec<String> {
        items
            .iter()
            .map(|item| match item {
                DisplayItem::Card { card, .. } => card.text.clone(),
                DisplayItem::Marker => "_".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_idle_shows_all_cards() {
        let board = board();
        let items = display_list(&board, &DragState::Idle, ColumnKey::Todo);
        assert_eq!(render(&items), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_marker_takes_dragged_card_slot_on_start() {
        let board = board();
        let mut drag = DragState::default();
        drag.start(&board, ColumnKey::Todo, 1).unwrap();

        let items = display_list(&board, &drag, ColumnKey::Todo);
        assert_eq!(render(&items), vec!["A", "_", "C"]);
        assert_eq!(items[2], DisplayItem::Card { index: 2, card: &board.cards(ColumnKey::Todo)[2] });
    }

    #[test]
    fn test_dragged_card_hidden_when_marker_off_board() {
        let board = board();
        let mut drag = DragState::default();
        drag.start(&board, ColumnKey::Todo, 1).unwrap();

        if let Some((session, marker)) = drag.parts_mut() {
            InsertionResolver::new(&board, session).leave_board(marker);
        }

        let items = display_list(&board, &drag, ColumnKey::Todo);
        assert_eq!(render(&items), vec!["A", "C"]);
    }

    #[test]
    fn test_marker_shown_at_resolved_slot() {
        let board = board();
        let mut drag = DragState::default();
        drag.start(&board, ColumnKey::Todo, 0).unwrap();

        if let Some((session, marker)) = drag.parts_mut() {
            InsertionResolver::new(&board, session).over_card(marker, ColumnKey::Todo, 2, Side::After);
        }

        let items = display_list(&board, &drag, ColumnKey::Todo);
        assert_eq!(render(&items), vec!["B", "C", "_"]);

        let other = display_list(&board, &drag, ColumnKey::Done);
        assert!(other.is_empty());
    }

    #[test]
    fn test_columns_use_configured_titles() {
        let board = board();
        let config = BoardConfig::default();
        let views = columns(&board, &DragState::Idle, &config);

        let titles: Vec<&str> = views.iter().map(|v| v.title).collect();
        assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
        assert_eq!(views[0].items.len(), 3);
    }
}
