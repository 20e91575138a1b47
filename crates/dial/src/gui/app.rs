use crate::config::Config;
use crate::events::AppEvent;
use crate::gui::add_item::{AddItemDialog, AddItemMsg, AddItemOutput};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::wheel::{self, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::session::Session;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::RelmWidgetExt;
use relm4::prelude::*;
use rotor::ItemName;
use rotor::layout::Point;
use rotor::store::FileStore;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

pub type AppSession = Session<FileStore>;

pub struct AppModel {
    pub session: Rc<RefCell<AppSession>>,
    pub ticking: Rc<Cell<bool>>,
    pub add_item: Controller<AddItemDialog>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Mount,
    DragUpdate(f64),
    DragEnd,
    Tap(Point),
    Toggle,
    Delete,
    AdvancePrevious,
    ShowAddItem,
    AddItem(ItemName),
    ConfigReload(Config),
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload(config) => AppMsg::ConfigReload(config),
        }
    }
}

impl AppModel {
    /// Drives the wheel from the frame clock until it comes to rest.
    fn animate(&self) {
        if self.ticking.replace(true) {
            return;
        }
        let session = self.session.clone();
        let ticking = self.ticking.clone();
        self.drawing_area.add_tick_callback(move |area, _| {
            let running = session.borrow_mut().tick(Instant::now());
            area.queue_draw();
            if running {
                glib::ControlFlow::Continue
            } else {
                ticking.set(false);
                glib::ControlFlow::Break
            }
        });
    }

    fn after_change(&self) {
        if self.session.borrow().wheel().is_settling() {
            self.animate();
        }
        self.drawing_area.queue_draw();
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (AppSession, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Dial"),
            set_default_width: DEFAULT_WIDTH,
            set_default_height: DEFAULT_HEIGHT,
            add_css_class: "dial-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    let msg = match key {
                        gdk::Key::Up => AppMsg::AdvancePrevious,
                        gdk::Key::space | gdk::Key::Return => AppMsg::Toggle,
                        gdk::Key::Delete => AppMsg::Delete,
                        _ => return glib::Propagation::Proceed,
                    };
                    sender.input(msg);
                    glib::Propagation::Stop
                }
            },

            #[name = "overlay"]
            gtk::Overlay {
                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "dial-drawing-area",

                    add_controller = gtk::GestureDrag {
                        connect_drag_update[sender] => move |_, _, offset_y| {
                            sender.input(AppMsg::DragUpdate(offset_y));
                        },
                        connect_drag_end[sender] => move |_, _, _| {
                            sender.input(AppMsg::DragEnd);
                        }
                    },

                    add_controller = gtk::GestureClick {
                        connect_released[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::Tap(Point::new(x, y)));
                        }
                    }
                },

                add_overlay = &gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_halign: gtk::Align::End,
                    set_valign: gtk::Align::End,
                    set_spacing: 8,
                    set_margin_all: 16,
                    add_css_class: "dial-controls",

                    gtk::Button {
                        set_icon_name: "list-add-symbolic",
                        set_tooltip_text: Some("Add item"),
                        connect_clicked => AppMsg::ShowAddItem,
                    },

                    gtk::Button {
                        set_icon_name: "user-trash-symbolic",
                        set_tooltip_text: Some("Delete item"),
                        connect_clicked => AppMsg::Delete,
                    },
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (session, rx) = init;

        theme::load_css();

        let mount_delay = session.config().mount_delay;
        let session = Rc::new(RefCell::new(session));

        let add_item = AddItemDialog::builder()
            .transient_for(&root)
            .launch(())
            .forward(sender.input_sender(), |output| match output {
                AddItemOutput::Add(name) => AppMsg::AddItem(name),
            });

        let model = AppModel {
            session: session.clone(),
            ticking: Rc::new(Cell::new(false)),
            add_item,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let session_draw = model.session.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                let session = session_draw.borrow();
                let center = wheel::wheel_center(width as f64, height as f64);
                let row_height = wheel::row_height(session.config());
                if let Err(e) = wheel::draw(
                    cr,
                    session.items(),
                    &session.layout(),
                    center,
                    row_height,
                    &colors,
                ) {
                    log::error!("Drawing error: {}", e);
                }
            });

        {
            let sender = sender.clone();
            glib::timeout_add_local_once(mount_delay, move || sender.input(AppMsg::Mount));
        }

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        let now = Instant::now();
        match msg {
            AppMsg::Mount => {
                self.session.borrow_mut().mount();
                self.drawing_area.queue_draw();
            }
            AppMsg::DragUpdate(offset) => {
                self.session.borrow_mut().drag(offset, now);
                self.drawing_area.queue_draw();
            }
            AppMsg::DragEnd => {
                self.session.borrow_mut().release(now);
                self.after_change();
            }
            AppMsg::Tap(point) => {
                let height = self.drawing_area.height() as f64;
                let hit = {
                    let session = self.session.borrow();
                    !session.wheel().is_dragging()
                        && wheel::hits_center_row(point, height, session.config())
                };
                if hit {
                    self.session.borrow_mut().check_off(now);
                    self.after_change();
                }
            }
            AppMsg::Toggle => {
                self.session.borrow_mut().toggle_active(now);
                self.drawing_area.queue_draw();
            }
            AppMsg::Delete => {
                self.session.borrow_mut().delete_active(now);
                self.after_change();
            }
            AppMsg::AdvancePrevious => {
                self.session.borrow_mut().advance_to_previous(now);
                self.after_change();
            }
            AppMsg::ShowAddItem => self.add_item.emit(AddItemMsg::Show),
            AppMsg::AddItem(name) => {
                self.session.borrow_mut().add(&name, now);
                self.after_change();
            }
            AppMsg::ConfigReload(config) => {
                self.session.borrow_mut().set_config(config.wheel);
                self.drawing_area.queue_draw();
                log::info!("Configuration reloaded");
            }
        }
    }
}
