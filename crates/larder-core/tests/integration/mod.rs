mod plan_to_list;
mod exports;
