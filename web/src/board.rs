use trivia_core::{Board, CellCoord, Clue, Reveal};
use web_sys::Element;
use yew::prelude::*;

const CELL_ATTR: &str = "data-cell";
const CELL_SELECTOR: &str = "td[data-cell]";
const HIDDEN_LABEL: &str = "?";

fn cell_label(clue: &Clue) -> &str {
    clue.visible_text().unwrap_or(HIDDEN_LABEL)
}

fn cell_classes(reveal: Reveal) -> Classes {
    classes!(
        "clue",
        match reveal {
            Reveal::Hidden => classes!(),
            Reveal::Question => classes!("question"),
            Reveal::Answer => classes!("answered"),
        }
    )
}

/// Resolves a click anywhere in the grid to the clue cell it landed in.
fn clicked_cell(e: &MouseEvent) -> Option<CellCoord> {
    let target: Element = e.target_dyn_into()?;
    let cell = target.closest(CELL_SELECTOR).ok()??;
    let raw = cell.get_attribute(CELL_ATTR)?;
    match raw.parse() {
        Ok(coord) => Some(coord),
        Err(err) => {
            log::warn!("bad {} {:?}: {}", CELL_ATTR, raw, err);
            None
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ClueProps {
    coord: CellCoord,
    label: AttrValue,
    reveal: Reveal,
}

#[function_component(ClueView)]
fn clue_component(props: &ClueProps) -> Html {
    let ClueProps {
        coord,
        label,
        reveal,
    } = props.clone();

    html! {
        <td class={cell_classes(reveal)} data-cell={coord.to_string()}>{label.to_string()}</td>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub board: Board,
    pub onreveal: Callback<CellCoord>,
}

/// One column per category, one row per clue. Clicks are handled once, on the table.
#[function_component(BoardView)]
pub(crate) fn board_component(props: &BoardProps) -> Html {
    let board = &props.board;

    let onclick = {
        let onreveal = props.onreveal.clone();
        Callback::from(move |e: MouseEvent| match clicked_cell(&e) {
            Some(coord) => {
                log::trace!("click {}", coord);
                onreveal.emit(coord);
            }
            None => log::trace!("click outside clue cells"),
        })
    };

    html! {
        <table class="board" {onclick}>
            <thead>
                <tr>
                    {
                        for board.categories().iter().map(|category| html! {
                            <th>{category.title().to_string()}</th>
                        })
                    }
                </tr>
            </thead>
            <tbody>
                {
                    for (0..board.rows()).map(|clue| html! {
                        <tr>
                            {
                                for (0..board.category_count()).map(|category| {
                                    let coord = CellCoord::new(category, clue);
                                    match board.clue_at(coord) {
                                        Some(entry) => {
                                            let label = AttrValue::from(cell_label(entry).to_string());
                                            let reveal = entry.reveal();
                                            html! { <ClueView {coord} {label} {reveal}/> }
                                        }
                                        None => html! { <td class="empty"/> },
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}
