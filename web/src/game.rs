use clap::Args;
use gloo::timers::future::TimeoutFuture;
use trivia_core::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::board::BoardView;
use crate::client::ApiClient;
use crate::utils::*;

/// Pause between collecting the board and showing it, so the spinner doesn't just flash.
const RENDER_DELAY_MS: u32 = 1000;

fn start_label(phase: LoadPhase, has_played: bool) -> &'static str {
    match phase {
        LoadPhase::Loading => "Loading...",
        LoadPhase::Idle if !has_played => "Start",
        LoadPhase::Idle | LoadPhase::Ready => "Restart",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Loaded(LoadTicket, Result<Vec<Category>>),
    RevealCell(CellCoord),
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed for the first game instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Base URL of the trivia API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api: String,
}

impl Default for GameProps {
    fn default() -> Self {
        Self {
            seed: None,
            api: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[function_component(Spinner)]
fn spinner_component() -> Html {
    html! {
        <div class="spinner-overlay">
            <div class="spinner"/>
        </div>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: GameController,
    endpoints: Endpoints,
    forced_seed: Option<u64>,
    pending_notice: Option<String>,
}

impl GameView {
    fn next_seed(&mut self) -> u64 {
        self.forced_seed.take().unwrap_or_else(js_random_seed)
    }

    fn start_game(&mut self, ctx: &Context<Self>) -> bool {
        if self.controller.phase().is_loading() {
            log::debug!("already loading, start ignored");
            return false;
        }

        let ticket = self.controller.start();
        let seed = self.next_seed();
        log::debug!("game {} seed: {}", ticket.generation(), seed);

        let client = ApiClient::new(self.endpoints.clone(), seed);
        let link = ctx.link().clone();
        spawn_local(async move {
            let loaded = load_categories(&client).await;
            if loaded.is_ok() {
                TimeoutFuture::new(RENDER_DELAY_MS).await;
            }
            link.send_message(Msg::Loaded(ticket, loaded));
        });
        true
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, api } = ctx.props().clone();
        Self {
            controller: GameController::new(),
            endpoints: Endpoints::new(api),
            forced_seed: seed,
            pending_notice: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => self.start_game(ctx),
            Loaded(ticket, loaded) => match self.controller.finish_load(ticket, loaded) {
                Commit::Ready => true,
                Commit::Aborted(notice) => {
                    self.pending_notice = Some(notice);
                    true
                }
                Commit::Stale => false,
            },
            RevealCell(coord) => {
                let outcome = self.controller.reveal(coord);
                log::debug!("reveal {}: {:?}", coord, outcome);
                if outcome.has_update()
                    && self
                        .controller
                        .board()
                        .is_some_and(Board::is_fully_answered)
                {
                    log::info!("every clue on the board is answered");
                }
                outcome.has_update()
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // shown once the idle view is on screen
        if let Some(notice) = self.pending_notice.take() {
            gloo::dialogs::alert(&notice);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });
        let cb_reveal = ctx.link().callback(Msg::RevealCell);

        html! {
            <GameFrame
                controller={self.controller.clone()}
                onstart={cb_start}
                onreveal={cb_reveal}
            />
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct FrameProps {
    pub controller: GameController,
    pub onstart: Callback<MouseEvent>,
    pub onreveal: Callback<CellCoord>,
}

/// Start control, spinner and board for the controller's current state.
#[function_component(GameFrame)]
pub(crate) fn frame_component(props: &FrameProps) -> Html {
    let FrameProps {
        controller,
        onstart,
        onreveal,
    } = props;
    let phase = controller.phase();
    let loading = phase.is_loading();
    let label = start_label(phase, controller.has_played());

    html! {
        <div class="trivia">
            <nav>
                <button class="start" onclick={onstart.clone()} disabled={loading}>{label}</button>
            </nav>
            if loading {
                <Spinner/>
            }
            if let Some(board) = controller.board() {
                <BoardView
                    key={controller.generation().to_string()}
                    board={board.clone()}
                    onreveal={onreveal.clone()}
                />
            }
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use std::collections::BTreeSet;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn categories(count: usize) -> Vec<Category> {
        (0..count)
            .map(|category| {
                Category::new(
                    format!("Category {category}"),
                    (0..CLUES_PER_CATEGORY)
                        .map(|clue| {
                            Clue::new(format!("Q{category}.{clue}"), format!("A{category}.{clue}"))
                        })
                        .collect(),
                )
            })
            .collect()
    }

    fn loaded_controller(count: usize) -> (GameController, Commit) {
        let mut controller = GameController::new();
        let ticket = controller.start();
        let commit = controller.finish_load(ticket, Ok(categories(count)));
        (controller, commit)
    }

    #[derive(Properties, Clone, PartialEq)]
    struct HarnessProps {
        controller: GameController,
    }

    /// Holds the controller in component state the way `GameView` does.
    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let controller = use_state(|| props.controller.clone());
        let onreveal = {
            let controller = controller.clone();
            Callback::from(move |coord: CellCoord| {
                let mut next = (*controller).clone();
                if next.reveal(coord).has_update() {
                    controller.set(next);
                }
            })
        };
        let onstart = Callback::from(|_: MouseEvent| ());

        html! {
            <GameFrame controller={(*controller).clone()} {onstart} {onreveal}/>
        }
    }

    async fn mount(controller: GameController) -> Element {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        yew::Renderer::<Harness>::with_root_and_props(root.clone(), HarnessProps { controller })
            .render();
        settle().await;
        root
    }

    async fn settle() {
        TimeoutFuture::new(0).await;
    }

    fn cell(root: &Element, coord: CellCoord) -> HtmlElement {
        root.query_selector(&format!("td[data-cell=\"{coord}\"]"))
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn classes_of(element: &Element) -> Vec<String> {
        element
            .get_attribute("class")
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    #[wasm_bindgen_test]
    async fn full_board_renders_twenty_five_addressable_cells() {
        let (controller, commit) = loaded_controller(5);
        assert_eq!(commit, Commit::Ready);
        let root = mount(controller).await;

        let cells = root.query_selector_all("td[data-cell]").unwrap();
        let coords: BTreeSet<String> = (0..cells.length())
            .filter_map(|i| cells.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|cell| cell.get_attribute("data-cell"))
            .collect();

        assert_eq!(cells.length(), 25);
        assert_eq!(coords.len(), 25);
        assert!(coords.iter().all(|raw| raw.parse::<CellCoord>().is_ok()));
        assert_eq!(root.query_selector_all("th").unwrap().length(), 5);
    }

    #[wasm_bindgen_test]
    async fn clicks_show_question_then_answered_answer() {
        let (controller, _) = loaded_controller(5);
        let root = mount(controller).await;
        let coord = CellCoord::new(2, 4);

        assert_eq!(cell(&root, coord).text_content().as_deref(), Some("?"));

        cell(&root, coord).click();
        settle().await;
        let clicked = cell(&root, coord);
        assert_eq!(clicked.text_content().as_deref(), Some("Q2.4"));
        assert!(classes_of(&clicked).contains(&"question".to_string()));
        assert!(!classes_of(&clicked).contains(&"answered".to_string()));

        cell(&root, coord).click();
        settle().await;
        let clicked = cell(&root, coord);
        assert_eq!(clicked.text_content().as_deref(), Some("A2.4"));
        assert!(classes_of(&clicked).contains(&"answered".to_string()));

        cell(&root, coord).click();
        settle().await;
        let clicked = cell(&root, coord);
        assert_eq!(clicked.text_content().as_deref(), Some("A2.4"));
        assert!(classes_of(&clicked).contains(&"answered".to_string()));

        let answered = root.query_selector_all("td.answered").unwrap().length();
        assert_eq!(answered, 1);
    }

    #[wasm_bindgen_test]
    async fn aborted_load_renders_no_table() {
        let (controller, commit) = loaded_controller(3);
        assert!(matches!(commit, Commit::Aborted(_)));
        let root = mount(controller).await;

        assert!(root.query_selector("table").unwrap().is_none());
        assert!(root.query_selector(".spinner").unwrap().is_none());
        let button = root.query_selector("button.start").unwrap().unwrap();
        assert_eq!(button.text_content().as_deref(), Some("Restart"));
        assert!(!button.has_attribute("disabled"));
    }
}
