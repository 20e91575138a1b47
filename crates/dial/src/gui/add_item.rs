use gtk::prelude::*;
use gtk4 as gtk;
use relm4::RelmWidgetExt;
use relm4::prelude::*;
use rotor::ItemName;

pub struct AddItemDialog {
    visible: bool,
    text: String,
    entry: gtk::Entry,
}

impl AddItemDialog {
    fn can_add(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[derive(Debug)]
pub enum AddItemMsg {
    Show,
    Changed(String),
    Confirm,
    Cancel,
}

#[derive(Debug)]
pub enum AddItemOutput {
    Add(ItemName),
}

#[relm4::component(pub)]
impl SimpleComponent for AddItemDialog {
    type Init = ();
    type Input = AddItemMsg;
    type Output = AddItemOutput;

    view! {
        #[root]
        gtk::Window {
            set_title: Some("Add Item"),
            set_modal: true,
            set_hide_on_close: true,
            set_default_width: 320,
            add_css_class: "dial-dialog",
            #[watch]
            set_visible: model.visible,

            connect_close_request[sender] => move |_| {
                sender.input(AddItemMsg::Cancel);
                glib::Propagation::Stop
            },

            #[wrap(Some)]
            set_titlebar = &gtk::HeaderBar {
                set_show_title_buttons: false,

                pack_start = &gtk::Button {
                    set_label: "Cancel",
                    connect_clicked => AddItemMsg::Cancel,
                },

                pack_end = &gtk::Button {
                    set_label: "Add",
                    add_css_class: "suggested-action",
                    #[watch]
                    set_sensitive: model.can_add(),
                    connect_clicked => AddItemMsg::Confirm,
                },
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_margin_all: 12,

                #[local_ref]
                entry -> gtk::Entry {
                    set_placeholder_text: Some("Item name"),
                    connect_changed[sender] => move |entry| {
                        sender.input(AddItemMsg::Changed(entry.text().to_string()));
                    },
                    connect_activate => AddItemMsg::Confirm,
                },
            },
        }
    }

    fn init(
        _init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let entry = gtk::Entry::default();
        let model = AddItemDialog {
            visible: false,
            text: String::new(),
            entry: entry.clone(),
        };

        let widgets = view_output!();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AddItemMsg::Show => {
                self.entry.set_text("");
                self.text.clear();
                self.visible = true;
                self.entry.grab_focus();
            }
            AddItemMsg::Changed(text) => self.text = text,
            AddItemMsg::Confirm => {
                // blank names leave the dialog open
                let Ok(name) = ItemName::parse(&self.text) else {
                    return;
                };
                if sender.output(AddItemOutput::Add(name)).is_err() {
                    log::error!("Add dialog output has no receiver");
                }
                self.visible = false;
            }
            AddItemMsg::Cancel => self.visible = false,
        }
    }
}
