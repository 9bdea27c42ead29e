//! Layout editor view: controls, canvas and summary around one `LayoutState`.

use crate::ui::gtk::controls::{rgba_to_hex, Controls};
use crate::ui::gtk::layout_canvas::LayoutCanvas;
use crate::ui::gtk::summary_list::SummaryList;
use gtk4::prelude::*;
use gtk4::{Box, Orientation, Separator};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tilekit_layout::LayoutState;
use tilekit_settings::Config;

type TitleHandler = std::boxed::Box<dyn Fn(&str)>;

pub struct LayoutView {
    pub widget: Box,
    pub canvas: Rc<LayoutCanvas>,
    pub controls: Controls,
    pub summary: SummaryList,
    pub state: Rc<RefCell<LayoutState>>,
    pub(crate) settings: Rc<RefCell<Config>>,
    /// Recent layouts, rebuilt whenever the list in settings changes.
    pub recent_menu: gio::Menu,
    syncing_inputs: Rc<Cell<bool>>,
    on_title: RefCell<Option<TitleHandler>>,
}

impl LayoutView {
    pub fn new(settings: Rc<RefCell<Config>>) -> Rc<Self> {
        let controls = Controls::new(&settings.borrow());

        let mut layout = LayoutState::with_tile_config(controls.tile_config());
        layout.set_object_name(controls.object_name());
        layout.set_object_color(controls.object_color());
        let state = Rc::new(RefCell::new(layout));

        let canvas = LayoutCanvas::new(state.clone());
        let summary = SummaryList::new();

        let widget = Box::new(Orientation::Vertical, 0);
        widget.append(&controls.widget);
        widget.append(&Separator::new(Orientation::Horizontal));
        widget.append(&canvas.widget);
        widget.append(&Separator::new(Orientation::Horizontal));
        widget.append(&summary.widget);

        let view = Rc::new(Self {
            widget,
            canvas,
            controls,
            summary,
            state,
            settings,
            recent_menu: gio::Menu::new(),
            syncing_inputs: Rc::new(Cell::new(false)),
            on_title: RefCell::new(None),
        });

        Self::connect_signals(&view);
        view.rebuild_recent_menu();
        view.refresh();
        view
    }

    #[allow(deprecated)]
    fn connect_signals(view: &Rc<Self>) {
        let state = view.state.clone();
        view.controls.name_entry.connect_changed(move |entry| {
            state.borrow_mut().set_object_name(entry.text().as_str());
        });

        let state = view.state.clone();
        view.controls.color_button.connect_color_set(move |button| {
            state.borrow_mut().set_object_color(rgba_to_hex(&button.rgba()));
        });

        for spin in [&view.controls.tile_width, &view.controls.tile_height] {
            let weak = Rc::downgrade(view);
            spin.connect_value_changed(move |_| {
                if let Some(view) = weak.upgrade() {
                    view.tile_inputs_changed();
                }
            });
        }

        let weak = Rc::downgrade(view);
        view.canvas.connect_commit(move |_shape| {
            if let Some(view) = weak.upgrade() {
                view.refresh_summary();
                view.update_title();
            }
        });

        let weak = Rc::downgrade(view);
        view.controls.recalc_button.connect_clicked(move |_| {
            if let Some(view) = weak.upgrade() {
                view.recalculate();
            }
        });

        let weak = Rc::downgrade(view);
        view.controls.new_button.connect_clicked(move |_| {
            if let Some(view) = weak.upgrade() {
                view.new_layout();
            }
        });

        let weak = Rc::downgrade(view);
        view.controls.export_button.connect_clicked(move |_| {
            if let Some(view) = weak.upgrade() {
                view.export_layout();
            }
        });

        let weak = Rc::downgrade(view);
        view.controls.import_button.connect_clicked(move |_| {
            if let Some(view) = weak.upgrade() {
                view.import_layout();
            }
        });

        let weak = Rc::downgrade(view);
        view.controls.export_image_button.connect_clicked(move |_| {
            if let Some(view) = weak.upgrade() {
                view.export_image();
            }
        });
    }

    /// Register the callback that receives the window title.
    pub fn connect_title_changed<F: Fn(&str) + 'static>(&self, f: F) {
        *self.on_title.borrow_mut() = Some(std::boxed::Box::new(f));
        self.update_title();
    }

    pub(crate) fn update_title(&self) {
        let name = self.state.borrow().display_name();
        if let Some(handler) = self.on_title.borrow().as_ref() {
            handler(&format!("TileKit - {}", name));
        }
    }

    fn tile_inputs_changed(&self) {
        if self.syncing_inputs.get() {
            return;
        }
        let config = self.controls.tile_config();
        self.state.borrow_mut().set_tile_config(config);
        self.refresh_summary();
    }

    /// Rebuilds the summary. Pending input text is committed first; the
    /// stored tile size is otherwise left as it is.
    pub fn recalculate(&self) {
        self.controls.commit_tile_inputs();
        self.state.borrow_mut().recalculate();
        self.refresh_summary();
    }

    pub fn refresh_summary(&self) {
        let state = self.state.borrow();
        self.summary.update(state.summary());
    }

    /// Redraws everything from the current state.
    pub fn refresh(&self) {
        self.refresh_summary();
        self.canvas.refresh();
        self.update_title();
    }

    /// Shows the state's tile size in the inputs without feeding it back.
    pub(crate) fn sync_tile_inputs(&self) {
        let config = self.state.borrow().tile_config;
        self.syncing_inputs.set(true);
        self.controls.set_tile_config(&config);
        self.syncing_inputs.set(false);
    }

    pub(crate) fn rebuild_recent_menu(&self) {
        self.recent_menu.remove_all();
        let settings = self.settings.borrow();
        for path in &settings.files.recent_layouts {
            let label = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let item = gio::MenuItem::new(Some(&label), None);
            item.set_action_and_target_value(
                Some("app.import-recent"),
                Some(&path.to_string_lossy().into_owned().to_variant()),
            );
            self.recent_menu.append_item(&item);
        }
    }
}
